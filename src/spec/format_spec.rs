// ============================================================================
// Number Format Spec
// Immutable configuration describing how a number is grouped and punctuated
// ============================================================================

use super::errors::{SpecError, SpecResult};
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Some locales group digits with a non-breaking space, which users cannot
/// type. Wherever it appears as a grouping separator, a regular space is
/// accepted on input as well.
pub const NON_BREAKING_SPACE: char = '\u{a0}';

/// Immutable description of a numeric text format.
///
/// A spec captures everything needed to decide what a formatted number looks
/// like and which keystroke sequences are acceptable while one is being
/// typed: separators, digits per group, digit limits and sign handling.
///
/// Constructed once per configuration and never mutated afterwards; the
/// `with_*` builder methods consume and return the value.
///
/// # Example
/// ```
/// use numentry::spec::NumberFormatSpec;
///
/// let spec = NumberFormatSpec::new(' ', ',')
///     .with_max_integer_digits(9)
///     .with_fraction_digits(0, 2);
/// assert!(spec.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormatSpec {
    grouping_separator: char,
    grouping_alternatives: Vec<char>,
    decimal_separator: char,
    grouping_size: usize,
    max_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    negative_allowed: bool,
    sign_character: char,
}

impl NumberFormatSpec {
    /// Default number of digits per group
    const DEFAULT_GROUPING_SIZE: usize = 3;

    /// Default cap on integer digits
    const DEFAULT_MAX_INTEGER_DIGITS: usize = 15;

    /// Default cap on fraction digits
    const DEFAULT_MAX_FRACTION_DIGITS: usize = 3;

    /// Create a spec with the given separators and the default limits:
    /// groups of three, up to 15 integer digits, up to 3 fraction digits,
    /// negative values allowed with a leading `-`.
    pub fn new(grouping_separator: char, decimal_separator: char) -> Self {
        Self {
            grouping_separator,
            grouping_alternatives: Vec::new(),
            decimal_separator,
            grouping_size: Self::DEFAULT_GROUPING_SIZE,
            max_integer_digits: Self::DEFAULT_MAX_INTEGER_DIGITS,
            min_fraction_digits: 0,
            max_fraction_digits: Self::DEFAULT_MAX_FRACTION_DIGITS,
            negative_allowed: true,
            sign_character: '-',
        }
    }

    /// Builder method: Set digits per group
    pub fn with_grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size;
        self
    }

    /// Builder method: Set the maximum number of integer digits
    pub fn with_max_integer_digits(mut self, digits: usize) -> Self {
        self.max_integer_digits = digits;
        self
    }

    /// Builder method: Set minimum and maximum fraction digits
    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    /// Builder method: Allow or forbid negative values
    pub fn with_negative_allowed(mut self, allowed: bool) -> Self {
        self.negative_allowed = allowed;
        self
    }

    /// Builder method: Set the sign character used for negative values
    pub fn with_sign_character(mut self, sign: char) -> Self {
        self.sign_character = sign;
        self
    }

    /// Builder method: Accept additional characters as grouping separators
    /// on input. Output formatting always uses the main separator.
    pub fn with_grouping_alternatives<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.grouping_alternatives = chars.into_iter().collect();
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// The first violated invariant, as a [`SpecError`].
    pub fn validate(&self) -> SpecResult<()> {
        if self.grouping_size == 0 {
            return Err(SpecError::GroupingSizeZero);
        }
        if self.max_integer_digits == 0 {
            return Err(SpecError::NoIntegerDigits);
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(SpecError::FractionRangeInverted {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }
        if self.grouping_separator == self.decimal_separator {
            return Err(SpecError::SeparatorClash {
                separator: self.decimal_separator,
            });
        }
        Ok(())
    }

    pub fn grouping_separator(&self) -> char {
        self.grouping_separator
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn grouping_size(&self) -> usize {
        self.grouping_size
    }

    pub fn max_integer_digits(&self) -> usize {
        self.max_integer_digits
    }

    pub fn min_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    pub fn max_fraction_digits(&self) -> usize {
        self.max_fraction_digits
    }

    pub fn negative_allowed(&self) -> bool {
        self.negative_allowed
    }

    pub fn sign_character(&self) -> char {
        self.sign_character
    }

    /// All characters accepted as a grouping separator on input: the main
    /// separator, any configured alternatives, and a regular space when the
    /// main separator is a non-breaking space.
    pub fn input_grouping_characters(&self) -> SmallVec<[char; 4]> {
        let mut chars: SmallVec<[char; 4]> = SmallVec::new();
        chars.push(self.grouping_separator);
        if self.grouping_separator == NON_BREAKING_SPACE {
            chars.push(' ');
        }
        for &c in &self.grouping_alternatives {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        chars
    }
}

// ============================================================================
// Locale Presets (Factory Methods)
// ============================================================================

impl NumberFormatSpec {
    /// US English: `1,234,567.89`
    pub fn en_us() -> Self {
        Self::new(',', '.')
    }

    /// German: `1.234.567,89`
    pub fn de_de() -> Self {
        Self::new('.', ',')
    }

    /// French: `1 234 567,89` (non-breaking space; regular space accepted
    /// on input)
    pub fn fr_fr() -> Self {
        Self::new(NON_BREAKING_SPACE, ',')
    }

    /// Polish: `1 234 567,89` (non-breaking space; regular space accepted
    /// on input)
    pub fn pl_pl() -> Self {
        Self::new(NON_BREAKING_SPACE, ',')
    }

    /// Swiss German: `1'234'567.89`
    pub fn ch_de() -> Self {
        Self::new('\'', '.')
    }
}
