use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Conflicting modes: {modes} cannot be combined")]
    ConflictingModes { modes: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("--generate count must be greater than 0")]
    ZeroCount,

    #[error(transparent)]
    Library(#[from] platesim::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
