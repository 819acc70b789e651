//! Cheap "does this look like a JSON object" pre-check.
//!
//! Used by lenient mode to skip inputs that are obviously empty or garbled
//! without invoking the parser. It is a heuristic: text can pass the check
//! and still fail to parse, and the parser remains the only authority.

/// Inputs shorter than this are never considered an object (`{}` included).
pub const MIN_INPUT_LEN: usize = 3;

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Returns true when `input` is at least [`MIN_INPUT_LEN`] characters long and
/// some line holds a `{`, at least one more character, then a `}`.
pub fn looks_like_object(input: &str) -> bool {
    if input.chars().nth(MIN_INPUT_LEN - 1).is_none() {
        return false;
    }
    input.split(LINE_TERMINATORS).any(has_brace_span)
}

fn has_brace_span(line: &str) -> bool {
    match (line.find('{'), line.rfind('}')) {
        (Some(open), Some(close)) => close > open + 1,
        _ => false,
    }
}
