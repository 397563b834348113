/// Core error type for the lstests helpers
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Parse failure: {0}")]
    ParseFailure(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ParseFailure(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
