//! Error types for sentclean library.

use thiserror::Error;

/// Result type alias for sentclean operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while sanitizing or segmenting text.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not text (for example, bytes that are not valid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The sanitizer or segmenter was configured with unusable options.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Error while rendering results (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::InvalidInput(format!("content is not valid UTF-8 text: {}", err))
    }
}
