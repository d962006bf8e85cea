//! Character-budget truncation

/// Cut `text` to at most `limit` characters.
///
/// Returns the kept prefix and, when something was cut, the original
/// length in characters.
pub fn truncate_chars(text: &str, limit: usize) -> (&str, Option<usize>) {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => (&text[..byte_idx], Some(text.chars().count())),
        None => (text, None),
    }
}
