pub mod health;
pub mod item;

pub use health::*;
pub use item::*;
