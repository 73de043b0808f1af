//! Color error types

use thiserror::Error;

/// Errors produced while reading colors from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Hex body is not 3, 6 or 8 digits long
    #[error("invalid hex length: expected 3, 6 or 8 digits, got {0}")]
    InvalidHexLength(usize),

    /// Hex body contains a non-hex character
    #[error("invalid hex digit: {0:?}")]
    InvalidHexDigit(char),

    /// Input matched none of the accepted color notations
    #[error("unrecognized color input: {0:?}")]
    UnrecognizedInput(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorError>;
