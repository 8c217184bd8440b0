//! Error type shared by the library and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // ------------------------------ Inference ------------------------------- //

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("unsupported shape at `{path}`: arrays of arrays are not supported")]
    UnsupportedShape { path: String },

    // ------------------------------- Ambient -------------------------------- //

    #[error("no value at JSON pointer `{pointer}`")]
    PointerNotFound { pointer: String },

    #[error("invalid config at {path}: {message}")]
    Config { path: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("glob pattern matched no files: {pattern}")]
    NoMatches { pattern: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput { reason: reason.into() }
    }
}
