// ============================================================================
// Spec Module
// Immutable number format configuration and its validation
// ============================================================================
//
// This module provides:
// - NumberFormatSpec: separators, grouping size, digit limits, sign handling
// - SpecError: fail-fast validation errors naming the violated invariant
// - Locale presets for common formats
//
// Design principles:
// - Specs are value objects: built once, never mutated
// - Every consumer validates before use; no partial output on invalid specs

mod errors;
mod format_spec;

pub use errors::{SpecError, SpecResult};
pub use format_spec::{NumberFormatSpec, NON_BREAKING_SPACE};
