// ============================================================================
// Pattern Module
// Keystroke-level input patterns for formatted numbers
// ============================================================================
//
// This module provides:
// - GroupLayout: computes digit-group boundaries for the integer part
// - PatternBuilder: renders a spec and layout into a regular expression
// - build_pattern: one-shot convenience over the default builder
//
// Design principles:
// - Group-boundary arithmetic and regex rendering are separate steps
// - Generated patterns accept every prefix of a formatted number, so they
//   can gate input as it is typed
// - The output is a plain string; callers choose their own regex engine

mod builder;
mod layout;
mod regex_tools;

pub use builder::{build_pattern, PatternBuilder};
pub use layout::GroupLayout;
pub use regex_tools::{character_selector, escaped, needs_escape};
