// ============================================================================
// Render Module
// Formatting values to display text and parsing entered text back
// ============================================================================
//
// This module provides:
// - format_decimal: value -> display text under a spec
// - parse_decimal: entered text -> value, lenient about partial input
// - ParseError: error types for parsing
//
// Formatted output is guaranteed to match the input pattern generated from
// the same spec, so a field can round-trip its own display text.

mod errors;
mod formatter;
mod parser;

pub use errors::{ParseError, ParseResult};
pub use formatter::format_decimal;
pub use parser::parse_decimal;
