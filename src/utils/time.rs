use chrono::{DateTime, Utc};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current UTC time as a naive ISO-8601 string with microseconds
pub fn utc_now_iso() -> String {
    format_iso(Utc::now())
}

pub fn format_iso(at: DateTime<Utc>) -> String {
    at.format(ISO_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    #[test]
    fn formats_with_microseconds_and_no_offset() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_iso(at), "2024-01-01T00:00:00.000000");
    }

    #[test]
    fn now_parses_back() {
        let stamp = utc_now_iso();
        assert!(NaiveDateTime::parse_from_str(&stamp, ISO_FORMAT).is_ok());
    }
}
