use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The schema description could not be turned into a shape tree.
    #[error("schema error at {path}: {message}")]
    Schema { path: String, message: String },

    /// A timestamp shape carries a `timestamp_format` that is not recognized.
    #[error("invalid timestamp format: {0}")]
    InvalidTimestampFormat(String),

    /// The value at `path` cannot be encoded with the shape found there.
    #[error("value at {path}: expected {expected}, found {found}")]
    Mismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value at {path}: NaN and infinite floats cannot be encoded as JSON")]
    NonFiniteFloat { path: String },

    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn schema(path: &str, message: impl Into<String>) -> Self {
        Error::Schema {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T: core::fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}
