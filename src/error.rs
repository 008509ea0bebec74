//! Error types for the stubcomplete library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`StubError`] enum. Convenience constructors mirror the variant names.
//!
//! # Examples
//!
//! ```
//! use stubcomplete::error::{StubError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StubError::invalid_argument("penalty must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for stubcomplete operations.
#[derive(Error, Debug)]
pub enum StubError {
    /// I/O errors (corpus and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller-supplied argument violates a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Normalization was asked to divide by a zero total weight
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),

    /// A wildcard pattern could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Malformed corpus input
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid configuration values
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error carrying added context, rendered with its cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StubError.
pub type Result<T> = std::result::Result<T, StubError>;

impl StubError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StubError::InvalidArgument(msg.into())
    }

    /// Create a new degenerate distribution error.
    pub fn degenerate<S: Into<String>>(msg: S) -> Self {
        StubError::DegenerateDistribution(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        StubError::Corpus(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StubError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StubError::invalid_argument("length mismatch");
        assert_eq!(error.to_string(), "Invalid argument: length mismatch");

        let error = StubError::degenerate("all weights are zero");
        assert_eq!(
            error.to_string(),
            "Degenerate distribution: all weights are zero"
        );

        let error = StubError::corpus("bad line");
        assert_eq!(error.to_string(), "Corpus error: bad line");
    }

    #[test]
    fn test_anyhow_context_conversion() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(StubError::corpus("bad line")).context("failed to load corpus from words.txt");
        let stub_error = StubError::from(result.unwrap_err());

        match &stub_error {
            StubError::Anyhow(e) => {
                assert_eq!(e.to_string(), "failed to load corpus from words.txt");
                assert_eq!(e.root_cause().to_string(), "Corpus error: bad line");
            }
            _ => panic!("Expected Anyhow error variant"),
        }
        assert_eq!(
            stub_error.to_string(),
            "failed to load corpus from words.txt: Corpus error: bad line"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stub_error = StubError::from(io_error);

        match stub_error {
            StubError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
