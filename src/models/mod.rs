pub mod item;
pub mod health;
pub mod error;

pub use item::*;
pub use health::*;
pub use error::*;
