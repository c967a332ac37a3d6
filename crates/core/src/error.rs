//! Error types for portalkit
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Most text helpers never fail: unparseable versions yield `None` and
//! malformed identifiers are simply "not auto-generated". Errors are reserved
//! for configuration problems, charset problems and I/O.

use std::io;
use thiserror::Error;

/// Result type alias for portalkit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for portalkit
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (version files, config files, icons)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Missing or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Charset label that no codec is registered for
    #[error("Unknown charset: {0}")]
    UnknownCharset(String),

    /// Text could not be converted between charsets in strict mode
    #[error("Encoding error ({charset}): {reason}")]
    Encoding {
        /// Charset involved in the failed conversion
        charset: String,
        /// What went wrong
        reason: String,
    },

    /// Invalid argument or exhausted state
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Build a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Build an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Build an encoding error for the given charset
    pub fn encoding(charset: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Encoding {
            charset: charset.into(),
            reason: reason.into(),
        }
    }

    /// True if this error was caused by configuration rather than input
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_) | Error::UnknownCharset(_))
    }
}
