//! Field formatting for fixed-width label real estate.
//!
//! Labels have room for a limited number of characters per line. These
//! helpers shorten long values with an ellipsis and tidy short values into
//! title case, and turn the record's boolean flags into the warning text
//! printed on the label.

/// Maximum number of characters a name or access code may occupy.
pub const MAX_FIELD_LENGTH: usize = 16;

/// Marker appended to truncated values.
pub const ELLIPSIS: &str = "...";

/// Printed when the holder may not be photographed.
pub const PHOTOGRAPHY_WARNING: &str = "NO PHOTOS";

/// Printed when the holder has allergies.
pub const ALLERGY_MARKER: &str = "ALLERGIES";

/// Truncates `text` when it does not fit in `max_length` characters,
/// otherwise capitalizes the first letter of every word.
///
/// A truncated value keeps its first `max_length - 3` characters followed by
/// [`ELLIPSIS`], so the result is exactly `max_length` characters long. A
/// `max_length` of three or less leaves only the ellipsis.
///
/// # Examples
///
/// ```rust
/// use labelstation_core::format::truncate_or_capitalize;
///
/// assert_eq!(truncate_or_capitalize(16, "jo ann"), "Jo Ann");
/// assert_eq!(truncate_or_capitalize(8, "bartholomew"), "barth...");
/// ```
pub fn truncate_or_capitalize(max_length: usize, text: &str) -> String {
    if text.chars().count() >= max_length {
        let kept: String = text
            .chars()
            .take(max_length.saturating_sub(ELLIPSIS.len()))
            .collect();
        return kept + ELLIPSIS;
    }
    title_case(text)
}

/// Uppercases the first character of every word and leaves the rest
/// untouched.
///
/// ASCII letters, digits and `_` continue a word and any other ASCII
/// character ends it, so `o'brien` becomes `O'Brien`. Outside ASCII only
/// whitespace ends a word. The result always has as many characters as the
/// input.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        result.push(if at_word_start { upper_char(ch) } else { ch });
        at_word_start = is_word_separator(ch);
    }
    result
}

/// Uppercases every character that has a single-character uppercase form.
///
/// Characters whose uppercase form is longer, such as `ß`, are kept as they
/// are so the result never grows.
pub fn uppercase(text: &str) -> String {
    text.chars().map(upper_char).collect()
}

fn upper_char(ch: char) -> char {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

fn is_word_separator(ch: char) -> bool {
    if ch.is_ascii() {
        !(ch.is_ascii_alphanumeric() || ch == '_')
    } else {
        ch.is_whitespace()
    }
}

/// Returns an empty string when `flag` is set and `when_false` otherwise.
pub fn derive_warning(flag: bool, when_false: &str) -> String {
    if flag {
        String::new()
    } else {
        when_false.to_string()
    }
}

/// Photography warning for a holder with the given consent.
pub fn photography_warning(can_photograph: bool) -> String {
    derive_warning(can_photograph, PHOTOGRAPHY_WARNING)
}

/// Allergy marker for a holder with or without allergies.
pub fn allergy_marker(has_allergies: bool) -> String {
    derive_warning(!has_allergies, ALLERGY_MARKER)
}
