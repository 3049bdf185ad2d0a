// ============================================================================
// Parse Errors
// Error types for turning entered text back into values
// ============================================================================

use crate::spec::SpecError;
use std::fmt;

/// Errors raised when parsing user-entered numeric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Input was empty (or only a sign character)
    EmptyInput,
    /// Input is not a number under the spec's separators
    InvalidInput,
    /// Input was negative but the spec forbids negative values
    NegativeNotAllowed,
    /// The spec itself is invalid; nothing was parsed
    InvalidSpec(SpecError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "input is empty"),
            ParseError::InvalidInput => write!(f, "invalid input: could not parse value"),
            ParseError::NegativeNotAllowed => {
                write!(f, "negative values are not allowed by the format")
            }
            ParseError::InvalidSpec(err) => write!(f, "invalid format spec: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidSpec(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpecError> for ParseError {
    fn from(err: SpecError) -> Self {
        ParseError::InvalidSpec(err)
    }
}

/// Result type alias for parsing
pub type ParseResult<T> = Result<T, ParseError>;
