//! Crate-level error type and `Result` alias.
//! Wraps I/O, S3 and JSON failures, and provides the `InputFailed` variant that
//! the line processor raises when an input source cannot be opened or read.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid source identifier: {0:?}")]
    InvalidSource(String),

    #[error("Unsupported scheme {scheme:?} in {uri}")]
    UnsupportedScheme { scheme: String, uri: String },

    #[error("S3 error for {uri}: {message}")]
    S3 { uri: String, message: String },

    #[error("No S3 client configured (set SE_ACCESS_KEY and SE_SECRET_KEY) to read {uri}")]
    MissingS3Config { uri: String },

    #[error("Failed to decompress {codec} input: {message}")]
    Decompress { codec: &'static str, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("{reason}")]
    InputFailed {
        input: String,
        #[source]
        reason: Box<Error>,
    },
}

impl Error {
    pub fn logging<E: std::fmt::Display>(e: E) -> Self {
        Error::Logging(e.to_string())
    }

    /// Identifier of the failing input, if this is an input source failure.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::InputFailed { input, .. } => Some(input),
            _ => None,
        }
    }
}
