//! Error types for the Wordhoard library.
//!
//! All fallible operations in Wordhoard report through the
//! [`WordhoardError`] enum, which carries enough information to tell an
//! unreadable source apart from an exhausted lexicon.
//!
//! # Examples
//!
//! ```
//! use wordhoard::error::{Result, WordhoardError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(WordhoardError::invalid_config("bins must be at least 1"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordhoard operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the message-carrying
/// variants.
#[derive(Error, Debug)]
pub enum WordhoardError {
    /// The word-list source could not be opened.
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// The configured entry limit was reached during population.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// `populate` was called on a lexicon that is already populated.
    #[error("Lexicon is already populated")]
    AlreadyPopulated,

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors while reading an opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with WordhoardError.
pub type Result<T> = std::result::Result<T, WordhoardError>;

impl WordhoardError {
    /// Create a new source-unavailable error.
    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        WordhoardError::SourceUnavailable(msg.into())
    }

    /// Create a new capacity-exceeded error.
    pub fn capacity_exceeded<S: Into<String>>(msg: S) -> Self {
        WordhoardError::CapacityExceeded(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordhoardError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = WordhoardError::source_unavailable("no such file");
        assert_eq!(error.to_string(), "Source unavailable: no such file");

        let error = WordhoardError::capacity_exceeded("limit of 10 reached");
        assert_eq!(error.to_string(), "Capacity exceeded: limit of 10 reached");

        let error = WordhoardError::invalid_config("bins must be at least 1");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: bins must be at least 1"
        );

        let error = WordhoardError::AlreadyPopulated;
        assert_eq!(error.to_string(), "Lexicon is already populated");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated read");
        let wordhoard_error = WordhoardError::from(io_error);

        match wordhoard_error {
            WordhoardError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
