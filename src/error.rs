//! Error types for docrank library.

use std::io;
use thiserror::Error;

/// Result type alias for docrank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading input or producing output.
///
/// The analysis pipeline itself is total: degenerate documents, unknown
/// personas, and keyword-free sections all produce valid (empty or
/// zero-scored) results rather than errors. Errors exist only at the
/// serialization and I/O boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A fragment dump could not be deserialized.
    #[error("Invalid fragment input: {0}")]
    InvalidInput(String),

    /// Error during JSON output rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("missing field `fragments`".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid fragment input: missing field `fragments`"
        );

        let err = Error::Render("bad value".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad value");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
