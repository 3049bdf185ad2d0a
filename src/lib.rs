// ============================================================================
// Numentry Library
// Locale-aware input patterns, formatting and parsing for numeric text entry
// ============================================================================

//! # Numentry
//!
//! Pure-computation building blocks for numeric text fields: describe a
//! number format once, then generate the keystroke-level input pattern for
//! it, format values into it, and parse entered text back out of it.
//!
//! ## Features
//!
//! - **Input patterns** that accept every prefix of a correctly formatted
//!   number, so input can be validated as it is typed
//! - **Locale-aware separators** with escaping handled, including
//!   non-breaking-space grouping that also accepts a typed space
//! - **Exact decimal formatting and parsing** on top of `rust_decimal`
//! - **Fail-fast validation**: an invalid spec names its violated invariant
//!   and produces no output
//!
//! ## Example
//!
//! ```rust
//! use numentry::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // groups of three, comma decimals, at most 9 integer and 2 fraction digits
//! let spec = NumberFormatSpec::new(' ', ',')
//!     .with_max_integer_digits(9)
//!     .with_fraction_digits(0, 2);
//!
//! // a regex for everything legal while typing, from "" to "123 456 789,12"
//! let pattern = build_pattern(&spec).unwrap();
//! let gate = regex::Regex::new(&pattern).unwrap();
//! assert!(gate.is_match("123 456 7"));
//!
//! // formatted output always passes the gate
//! let text = format_decimal(Decimal::new(123456789, 2), &spec).unwrap();
//! assert_eq!(text, "1 234 567,89");
//! assert!(gate.is_match(&text));
//!
//! // and parses back to the same value
//! assert_eq!(parse_decimal(&text, &spec).unwrap(), Decimal::new(123456789, 2));
//! ```

pub mod pattern;
pub mod render;
pub mod spec;

// Re-exports for convenience
pub mod prelude {
    pub use crate::pattern::{build_pattern, GroupLayout, PatternBuilder};
    pub use crate::render::{format_decimal, parse_decimal, ParseError, ParseResult};
    pub use crate::spec::{NumberFormatSpec, SpecError, SpecResult};
}
