/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*            Error types              */
/***************************************/
/// Errors returned by a car. A rejected request leaves the car untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("invalid floor request: {floor} is outside 1..={floor_count}")]
    InvalidFloorRequest { floor: i32, floor_count: i32 },
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type CarResult<T> = Result<T, CarError>;
