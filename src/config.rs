use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Environment (dev, staging, prod)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// CORS allowed origins, comma separated. Unset allows any origin.
    pub cors_origins: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables or app.env file
    pub fn load() -> Result<Self, ConfigError> {
        // Try to load from app.env file first
        if std::path::Path::new("app.env").exists() {
            dotenvy::from_filename("app.env").ok();
        } else {
            // Fallback to .env file
            dotenvy::dotenv().ok();
        }

        Ok(envy::from_env::<Config>()?)
    }

    /// Get the full server address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter directives
    pub fn log_filter(&self) -> String {
        format!("item_api={level},tower_http={level},axum::rejection=trace,info", level = self.log_level)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.to_lowercase() == "dev" || self.environment.to_lowercase() == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "prod" || self.environment.to_lowercase() == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
            log_level: default_log_level(),
            cors_origins: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable error: {0}")]
    EnvError(#[from] envy::Error),
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    2000
}

fn default_log_level() -> String {
    "debug".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_fixed_port() {
        let config = Config::default();
        assert_eq!(config.server_address(), "0.0.0.0:2000");
        assert!(config.is_development());
        assert!(!config.is_production());
        assert!(config.cors_origins.is_none());
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.port, 2000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn reads_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8081".to_string()),
            ("ENVIRONMENT".to_string(), "Production".to_string()),
            ("CORS_ORIGINS".to_string(), "http://localhost:3000".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8081);
        assert!(config.is_production());
        assert_eq!(config.cors_origins.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn rejects_bad_port() {
        let vars = vec![("PORT".to_string(), "not-a-port".to_string())];
        let result: Result<Config, ConfigError> = envy::from_iter::<_, Config>(vars).map_err(ConfigError::from);
        assert!(result.is_err());
    }

    #[test]
    fn log_filter_uses_level() {
        let config = Config { log_level: "warn".to_string(), ..Config::default() };
        assert!(config.log_filter().starts_with("item_api=warn,tower_http=warn"));
    }
}
