// ============================================================================
// Parser
// Turns entered text back into decimal values under a NumberFormatSpec
// ============================================================================

use super::errors::{ParseError, ParseResult};
use crate::spec::NumberFormatSpec;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse user-entered text into a value.
///
/// Parsing is deliberately more lenient than the input pattern: grouping
/// separators (including accepted alternatives) may appear anywhere and are
/// stripped, a trailing decimal separator is ignored, a missing integer part
/// defaults to zero, and scientific notation (`1,5e3`) is understood. The
/// pattern gates keystrokes; the parser recovers a value from whatever text
/// survived that gate.
///
/// # Errors
/// - [`ParseError::EmptyInput`] for empty text, a bare sign, or text made of
///   separators only
/// - [`ParseError::NegativeNotAllowed`] when the spec forbids negatives
/// - [`ParseError::InvalidInput`] for anything that is not a number
/// - [`ParseError::InvalidSpec`] when the spec violates an invariant
///
/// # Example
/// ```
/// use numentry::render::parse_decimal;
/// use numentry::spec::NumberFormatSpec;
/// use rust_decimal::Decimal;
///
/// let spec = NumberFormatSpec::new(' ', ',');
/// assert_eq!(
///     parse_decimal("1 234,56", &spec).unwrap(),
///     Decimal::new(123456, 2)
/// );
/// ```
pub fn parse_decimal(input: &str, spec: &NumberFormatSpec) -> ParseResult<Decimal> {
    spec.validate()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (negative, unsigned) = match trimmed.strip_prefix(spec.sign_character()) {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if negative && !spec.negative_allowed() {
        return Err(ParseError::NegativeNotAllowed);
    }

    // text made of nothing but separators carries no digits; checked before
    // normalization, which synthesizes a zero for a leading separator
    let grouping = spec.input_grouping_characters();
    if unsigned
        .chars()
        .all(|c| grouping.contains(&c) || c == spec.decimal_separator())
    {
        return Err(ParseError::EmptyInput);
    }

    let normalized = normalize(unsigned, spec)?;
    // only the configured sign character marks a negative value; a bare
    // minus or plus that survived normalization is not a number here
    if normalized.starts_with(['-', '+']) {
        return Err(ParseError::InvalidInput);
    }

    let magnitude = if normalized.contains(['e', 'E']) {
        Decimal::from_scientific(&normalized).map_err(|_| ParseError::InvalidInput)?
    } else {
        Decimal::from_str(&normalized).map_err(|_| ParseError::InvalidInput)?
    };

    if negative {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Strip grouping characters and rewrite the decimal separator to `.`,
/// yielding text `rust_decimal` understands.
fn normalize(unsigned: &str, spec: &NumberFormatSpec) -> ParseResult<String> {
    let grouping = spec.input_grouping_characters();
    let mut normalized = String::with_capacity(unsigned.len() + 1);
    let mut separator_seen = false;

    for c in unsigned.chars() {
        if grouping.contains(&c) {
            continue;
        }
        if c == spec.decimal_separator() {
            if separator_seen {
                return Err(ParseError::InvalidInput);
            }
            separator_seen = true;
            // a leading separator means a zero integer part
            if normalized.is_empty() {
                normalized.push('0');
            }
            normalized.push('.');
        } else {
            normalized.push(c);
        }
    }

    // a trailing separator carries no digits
    if normalized.ends_with('.') {
        normalized.pop();
    }
    Ok(normalized)
}
