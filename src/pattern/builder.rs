// ============================================================================
// Pattern Builder
// Renders a NumberFormatSpec into a keystroke-level input regex
// ============================================================================

use super::layout::GroupLayout;
use super::regex_tools::{character_selector, push_digit_run, push_escaped};
use crate::spec::{NumberFormatSpec, SpecResult};
use std::fmt::Write;

/// Builds a regular expression matching every legal keystroke sequence for a
/// number under a given [`NumberFormatSpec`]: the empty string, any prefix of
/// a correctly formatted number, and any fully formatted number. Grouping
/// separators are optional on input, so ungrouped digits are legal too.
///
/// The builder itself only holds input-acceptance options; all formatting
/// knowledge lives in the spec.
///
/// # Example
/// ```
/// use numentry::pattern::PatternBuilder;
/// use numentry::spec::NumberFormatSpec;
///
/// let spec = NumberFormatSpec::new(' ', ',')
///     .with_max_integer_digits(9)
///     .with_fraction_digits(0, 2);
/// let pattern = PatternBuilder::new().build(&spec).unwrap();
///
/// let re = regex::Regex::new(&pattern).unwrap();
/// assert!(re.is_match("123 456 789,12"));
/// assert!(re.is_match(""));
/// assert!(!re.is_match("1234567890"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternBuilder {
    integer_part_optional: bool,
    scientific_notation: bool,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Allow input to start directly at the decimal
    /// separator (e.g. `,5`), defaulting the integer part to zero.
    pub fn with_optional_integer_part(mut self, optional: bool) -> Self {
        self.integer_part_optional = optional;
        self
    }

    /// Builder method: Additionally accept scientific notation
    /// (e.g. `1,23e-4`) alongside the plain grouped form.
    pub fn with_scientific_notation(mut self, enabled: bool) -> Self {
        self.scientific_notation = enabled;
        self
    }

    /// Compile the spec into a regular expression string.
    ///
    /// # Errors
    /// [`SpecError`](crate::spec::SpecError) when the spec violates an
    /// invariant; no partial pattern is returned.
    pub fn build(&self, spec: &NumberFormatSpec) -> SpecResult<String> {
        spec.validate()?;

        let mut pattern = String::with_capacity(128);
        if self.scientific_notation {
            pattern.push('(');
            self.render_plain(&mut pattern, spec);
            pattern.push_str(")|(");
            self.render_scientific(&mut pattern, spec);
            pattern.push(')');
        } else {
            self.render_plain(&mut pattern, spec);
        }

        tracing::debug!(%pattern, "input pattern built");
        Ok(pattern)
    }

    /// The grouped decimal form: `^sign?( integer ( dec fraction )? )?$`.
    fn render_plain(&self, out: &mut String, spec: &NumberFormatSpec) {
        out.push('^');
        if spec.negative_allowed() {
            push_escaped(out, spec.sign_character());
            out.push('?');
        }

        // everything past the sign is optional, so the empty string matches
        out.push('(');
        self.render_integer_part(out, spec);
        if spec.max_fraction_digits() > 0 {
            out.push('(');
            push_escaped(out, spec.decimal_separator());
            push_digit_run(out, 0, spec.max_fraction_digits());
            out.push_str(")?");
        }
        out.push_str(")?$");
    }

    /// The integer digits, with every group boundary optionally preceded by
    /// the grouping separator.
    fn render_integer_part(&self, out: &mut String, spec: &NumberFormatSpec) {
        let input_chars = spec.input_grouping_characters();
        let sep = character_selector(input_chars[0], &input_chars[1..]);
        let leading_min = usize::from(!self.integer_part_optional);

        match GroupLayout::for_spec(spec) {
            GroupLayout::Single { digits } => {
                push_digit_run(out, leading_min, digits);
            }
            GroupLayout::Grouped {
                leading,
                middle: 0,
                group,
            } => {
                push_digit_run(out, leading_min, leading);
                let _ = write!(out, "{}?", sep);
                push_digit_run(out, 0, group);
            }
            GroupLayout::Grouped {
                leading,
                middle,
                group,
            } => {
                out.push_str("((");
                // either the leading group is present...
                push_digit_run(out, leading_min, leading);
                // ...followed by optionally separated full middle groups
                let _ = write!(out, "({}?\\d{{{}}}){{0,{}}}", sep, group, middle);
                // ...and an optionally separated partial trailing group
                let _ = write!(out, "({}?\\d{{0,{}}})?", sep, group);
                out.push_str(")|(");
                // or the number is shorter than the maximum and starts with
                // a group of up to full size
                push_digit_run(out, leading_min, group);
                if middle > 1 {
                    let _ = write!(out, "({}?\\d{{{}}}){{0,{}}}", sep, group, middle - 1);
                }
                let _ = write!(out, "({}?\\d{{0,{}}})?", sep, group);
                out.push_str("))");
            }
        }
    }

    /// Scientific form: one mantissa digit, optional fraction, optional
    /// exponent with optional negative sign.
    fn render_scientific(&self, out: &mut String, spec: &NumberFormatSpec) {
        out.push('^');
        if spec.negative_allowed() {
            push_escaped(out, spec.sign_character());
            out.push('?');
        }
        out.push_str("\\d(");
        push_escaped(out, spec.decimal_separator());
        out.push_str("\\d+)?((e|E)-?\\d*)?$");
    }
}

/// Compile a spec into an input pattern with the default options.
///
/// # Errors
/// [`SpecError`](crate::spec::SpecError) when the spec violates an invariant.
pub fn build_pattern(spec: &NumberFormatSpec) -> SpecResult<String> {
    PatternBuilder::new().build(spec)
}
