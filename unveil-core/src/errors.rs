//! errors.rs - Custom error types for the unveil-core library.
//!
//! Analysis, cleaning, extraction and decoding never fail. The variants below
//! cover configuration and encoder misuse only.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by `unveil-core`.
///
/// `#[non_exhaustive]` leaves room for new variants without breaking callers
/// that match on this enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnveilError {
    #[error("Unknown decoding strategy '{0}'")]
    UnknownStrategy(String),

    #[error("Unknown encoding scheme '{0}'")]
    UnknownScheme(String),

    #[error("Confidence {0} is outside the range [0, 1]")]
    InvalidConfidence(f64),

    #[error("The homoglyph scheme needs a cover text to hide the message in")]
    MissingCover,

    #[error("Invalid decoder configuration:\n{0}")]
    ConfigValidation(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
