// ============================================================================
// Formatter
// Renders decimal values as display text under a NumberFormatSpec
// ============================================================================

use crate::spec::{NumberFormatSpec, SpecResult};
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;

/// Format a value as display text under the spec.
///
/// The fraction is rounded to `max_fraction_digits` (banker's rounding),
/// trailing zeros are trimmed down to `min_fraction_digits` and padded back
/// up to it. Integer digits beyond `max_integer_digits` are dropped from the
/// left, keeping the rightmost digits. When negatives are disallowed the
/// absolute value is formatted.
///
/// Output always matches the pattern generated from the same spec.
///
/// # Errors
/// [`SpecError`](crate::spec::SpecError) when the spec violates an invariant.
///
/// # Example
/// ```
/// use numentry::render::format_decimal;
/// use numentry::spec::NumberFormatSpec;
/// use rust_decimal::Decimal;
///
/// let spec = NumberFormatSpec::new(' ', ',').with_fraction_digits(0, 2);
/// let text = format_decimal(Decimal::new(123456789, 3), &spec).unwrap();
/// assert_eq!(text, "123 456,79");
/// ```
pub fn format_decimal(value: Decimal, spec: &NumberFormatSpec) -> SpecResult<String> {
    spec.validate()?;

    let rounded = value.round_dp_with_strategy(
        spec.max_fraction_digits() as u32,
        RoundingStrategy::MidpointNearestEven,
    );

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    if negative && !spec.negative_allowed() {
        tracing::debug!(%value, "negative value under a non-negative format, formatting magnitude");
    }

    let magnitude = rounded.abs();
    let integer_digits = clamp_integer_digits(
        magnitude.trunc().normalize().to_string(),
        spec.max_integer_digits(),
    );
    let fraction_digits = fraction_digits(
        &magnitude,
        spec.min_fraction_digits(),
        spec.max_fraction_digits(),
    );

    let mut out = String::with_capacity(integer_digits.len() * 2 + fraction_digits.len() + 2);
    if negative && spec.negative_allowed() {
        out.push(spec.sign_character());
    }
    push_grouped(
        &mut out,
        &integer_digits,
        spec.grouping_size(),
        spec.grouping_separator(),
    );
    if !fraction_digits.is_empty() {
        out.push(spec.decimal_separator());
        out.push_str(&fraction_digits);
    }
    Ok(out)
}

/// Keep only the rightmost `max` digits, then drop any leading zeros this
/// exposes (always leaving at least one digit).
fn clamp_integer_digits(digits: String, max: usize) -> String {
    let mut digits = if digits.len() > max {
        digits[digits.len() - max..].to_string()
    } else {
        digits
    };
    while digits.len() > 1 && digits.starts_with('0') {
        digits.remove(0);
    }
    digits
}

/// The fraction digits of the magnitude, trimmed and padded into the
/// min..=max range.
fn fraction_digits(magnitude: &Decimal, min: usize, max: usize) -> String {
    let text = magnitude.to_string();
    let mut digits = match text.split_once('.') {
        Some((_, fraction)) => fraction.to_string(),
        None => String::new(),
    };

    digits.truncate(max);
    while digits.len() > min && digits.ends_with('0') {
        digits.pop();
    }
    while digits.len() < min {
        digits.push('0');
    }
    digits
}

/// Append the digits with a separator between groups, grouping from the
/// right.
fn push_grouped(out: &mut String, digits: &str, size: usize, separator: char) {
    let size = size.max(1);

    // digit strings are ASCII, so byte slicing is safe
    let mut groups: SmallVec<[&str; 8]> = SmallVec::new();
    let mut end = digits.len();
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
    }
    groups.push(&digits[..end]);

    for (index, group) in groups.iter().rev().enumerate() {
        if index > 0 {
            out.push(separator);
        }
        out.push_str(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SpecError, NON_BREAKING_SPACE};
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    fn spec() -> NumberFormatSpec {
        NumberFormatSpec::new(' ', ',').with_fraction_digits(0, 2)
    }

    #[test]
    fn test_grouping() {
        assert_eq!(format_decimal(dec("1234567"), &spec()).unwrap(), "1 234 567");
        assert_eq!(format_decimal(dec("123"), &spec()).unwrap(), "123");
        assert_eq!(format_decimal(dec("1234"), &spec()).unwrap(), "1 234");
        assert_eq!(format_decimal(dec("0"), &spec()).unwrap(), "0");
    }

    #[test]
    fn test_fraction_rounding_and_trimming() {
        assert_eq!(
            format_decimal(dec("1234567.891"), &spec()).unwrap(),
            "1 234 567,89"
        );
        // banker's rounding: ties to even
        assert_eq!(format_decimal(dec("0.125"), &spec()).unwrap(), "0,12");
        assert_eq!(format_decimal(dec("0.135"), &spec()).unwrap(), "0,14");
        // trailing zeros trimmed when min is zero
        assert_eq!(format_decimal(dec("1.20"), &spec()).unwrap(), "1,2");
        assert_eq!(format_decimal(dec("1.00"), &spec()).unwrap(), "1");
    }

    #[test]
    fn test_minimum_fraction_digits_padded() {
        let spec = NumberFormatSpec::new(' ', ',').with_fraction_digits(2, 4);
        assert_eq!(format_decimal(dec("5"), &spec).unwrap(), "5,00");
        assert_eq!(format_decimal(dec("5.1"), &spec).unwrap(), "5,10");
        assert_eq!(format_decimal(dec("5.12345"), &spec).unwrap(), "5,1234");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_decimal(dec("-1234.5"), &spec()).unwrap(), "-1 234,5");

        let positive_only = spec().with_negative_allowed(false);
        assert_eq!(
            format_decimal(dec("-1234.5"), &positive_only).unwrap(),
            "1 234,5"
        );
    }

    #[test]
    fn test_integer_digits_clamped() {
        let spec = spec().with_max_integer_digits(5);
        assert_eq!(format_decimal(dec("1234567"), &spec).unwrap(), "34 567");
        // truncation may expose leading zeros, which are dropped
        assert_eq!(format_decimal(dec("1204567"), &spec).unwrap(), "4 567");
    }

    #[test]
    fn test_locale_presets() {
        assert_eq!(
            format_decimal(dec("1234567.89"), &NumberFormatSpec::en_us()).unwrap(),
            "1,234,567.89"
        );
        assert_eq!(
            format_decimal(dec("1234567.89"), &NumberFormatSpec::de_de()).unwrap(),
            "1.234.567,89"
        );
        assert_eq!(
            format_decimal(dec("1234"), &NumberFormatSpec::fr_fr()).unwrap(),
            format!("1{}234", NON_BREAKING_SPACE)
        );
        assert_eq!(
            format_decimal(dec("1234567.89"), &NumberFormatSpec::ch_de()).unwrap(),
            "1'234'567.89"
        );
    }

    #[test]
    fn test_invalid_spec_fails_fast() {
        let spec = NumberFormatSpec::en_us().with_fraction_digits(3, 1);
        assert_eq!(
            format_decimal(dec("1"), &spec),
            Err(SpecError::FractionRangeInverted { min: 3, max: 1 })
        );
    }

    #[test]
    fn test_single_digit_groups() {
        let spec = NumberFormatSpec::new(' ', ',').with_grouping_size(1);
        assert_eq!(format_decimal(dec("1234"), &spec).unwrap(), "1 2 3 4");
    }
}
