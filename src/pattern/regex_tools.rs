// ============================================================================
// Regex Tools
// Escaping and character-class helpers for building patterns by hand
// ============================================================================

/// Characters that carry meaning in a regular expression and must be escaped
/// before being inserted literally.
const CHARACTERS_TO_ESCAPE: &[char] = &[
    '\\', '.', '[', ']', '{', '}', '(', ')', '<', '>', '*', '+', '-', '=', '!', '?', '^', '$', '|',
];

/// Whether a character needs a backslash in front of it.
pub fn needs_escape(character: char) -> bool {
    CHARACTERS_TO_ESCAPE.contains(&character)
}

/// Append the character to the buffer, escaped if needed.
pub fn push_escaped(out: &mut String, character: char) {
    if needs_escape(character) {
        out.push('\\');
    }
    out.push(character);
}

/// The character as a standalone regex fragment.
pub fn escaped(character: char) -> String {
    let mut out = String::with_capacity(2);
    push_escaped(&mut out, character);
    out
}

/// A regex fragment matching the main character or any of the alternatives:
/// a single escaped character when there are no distinct alternatives, a
/// character class otherwise. Duplicates among the alternatives are ignored.
pub fn character_selector(main: char, alternatives: &[char]) -> String {
    let mut distinct: Vec<char> = Vec::new();
    for &c in alternatives {
        if c != main && !distinct.contains(&c) {
            distinct.push(c);
        }
    }

    if distinct.is_empty() {
        return escaped(main);
    }

    let mut out = String::with_capacity(4 + distinct.len() * 2);
    out.push('[');
    push_escaped(&mut out, main);
    for c in distinct {
        push_escaped(&mut out, c);
    }
    out.push(']');
    out
}

/// Append `\d{min,max}` to the buffer.
pub fn push_digit_run(out: &mut String, min: usize, max: usize) {
    use std::fmt::Write;
    let _ = write!(out, "\\d{{{},{}}}", min, max);
}
