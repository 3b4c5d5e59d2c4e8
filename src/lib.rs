/* Modules */
pub mod config;
pub mod elevator;
pub mod error;
pub mod shared;

pub use elevator::Car;
pub use error::{CarError, ConfigError};
pub use shared::{CarState, Direction};
