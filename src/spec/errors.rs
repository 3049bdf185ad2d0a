// ============================================================================
// Format Spec Errors
// Error types for number format configuration validation
// ============================================================================

use std::fmt;

/// Errors raised when a [`NumberFormatSpec`](super::NumberFormatSpec) violates
/// one of its invariants. Validation fails fast: the first violated invariant
/// is reported and no pattern or formatted output is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecError {
    /// `grouping_size` must be at least 1
    GroupingSizeZero,
    /// `max_integer_digits` must be at least 1
    NoIntegerDigits,
    /// `min_fraction_digits` exceeded `max_fraction_digits`
    FractionRangeInverted { min: usize, max: usize },
    /// Grouping and decimal separators are the same character
    SeparatorClash { separator: char },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::GroupingSizeZero => {
                write!(f, "grouping size must be at least one digit per group")
            }
            SpecError::NoIntegerDigits => {
                write!(f, "at least one integer digit must be allowed")
            }
            SpecError::FractionRangeInverted { min, max } => write!(
                f,
                "minimum fraction digits ({}) exceeds maximum fraction digits ({})",
                min, max
            ),
            SpecError::SeparatorClash { separator } => write!(
                f,
                "grouping and decimal separator are both {:?}",
                separator
            ),
        }
    }
}

impl std::error::Error for SpecError {}

/// Result type alias for spec validation
pub type SpecResult<T> = Result<T, SpecError>;
