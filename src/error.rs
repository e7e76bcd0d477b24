//! Error types for the codec utilities

use thiserror::Error;

/// Error type covering every failure mode of the conversion routines
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Requested character-encoding label is not known to the codec registry
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// A slice or fixed-width decode addresses bytes outside the input's bounds
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// A hex or digit string contains a character outside the radix alphabet,
    /// or the parsed value does not fit the target integer width
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

/// Result type alias using our `CodecError` type
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create an unsupported-encoding error
    pub fn unsupported_encoding(label: impl Into<String>) -> Self {
        CodecError::UnsupportedEncoding(label.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        CodecError::OutOfRange(msg.into())
    }

    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        CodecError::MalformedInput(msg.into())
    }
}
