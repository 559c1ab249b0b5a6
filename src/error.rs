//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and JSON errors, and provides semantic variants
//! for argument validation and pairs-file parsing.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Empty input: {arg} must contain at least one character")]
    EmptyInput { arg: &'static str },

    #[error("Invalid length {len}: enter a string between {min} and {max} characters")]
    InvalidLength { len: usize, min: usize, max: usize },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl Error {
    pub fn invalid_argument<V: std::fmt::Display>(arg: &'static str, value: V) -> Self {
        Error::InvalidArgument {
            arg,
            value: value.to_string(),
        }
    }
}
