// ============================================================================
// Basic Usage Example
// ============================================================================

use numentry::prelude::*;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

fn main() {
    println!("=== Numentry Example ===\n");

    // Groups of three with a space, comma decimals, room for millions
    let spec = NumberFormatSpec::new(' ', ',')
        .with_max_integer_digits(9)
        .with_fraction_digits(0, 2);

    let pattern = build_pattern(&spec).unwrap();
    println!("Input pattern: {}\n", pattern);

    let gate = Regex::new(&pattern).unwrap();

    // Watch the pattern accept a number as it is typed
    println!("Typing \"1 234 567,89\" keystroke by keystroke:");
    let typed = "1 234 567,89";
    for (position, c) in typed.char_indices() {
        let partial = &typed[..position + c.len_utf8()];
        println!("  {:>14}  ->  {}", format!("{:?}", partial), gate.is_match(partial));
    }
    println!();

    // Inputs the pattern turns away
    println!("Rejected inputs:");
    for rejected in ["1234567890", "123,456", "1  2"] {
        println!("  {:?} matches: {}", rejected, gate.is_match(rejected));
    }
    println!();

    // Format a value into the same shape
    let value = Decimal::from_str("1234567.891").unwrap();
    let display = format_decimal(value, &spec).unwrap();
    println!("{} formats as {:?}", value, display);
    println!("Formatted text passes the gate: {}", gate.is_match(&display));

    // And parse it back
    let parsed = parse_decimal(&display, &spec).unwrap();
    println!("{:?} parses back to {}", display, parsed);
}
