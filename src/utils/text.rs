//! Display text helpers.

/// Marker appended to text cut by [`slice_text`].
pub const ELLIPSIS: &str = "...";

/// Cut `text` to `length` characters, appending `...` when anything was cut.
///
/// Counts `char`s, so multi-byte text is never split mid-character.
pub fn slice_text(text: &str, length: usize) -> String {
    match text.char_indices().nth(length) {
        Some((end, _)) => format!("{}{}", &text[..end], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(slice_text("hello", 10), "hello");
        assert_eq!(slice_text("hello", 5), "hello");
        assert_eq!(slice_text("", 0), "");
    }

    #[test]
    fn test_long_text_cut() {
        assert_eq!(slice_text("hello world", 5), "hello...");
        assert_eq!(slice_text("abc", 0), "...");
    }

    #[test]
    fn test_multibyte_boundary() {
        assert_eq!(slice_text("héllo wörld", 7), "héllo w...");
        assert_eq!(slice_text("日本語テキスト", 3), "日本語...");
        assert_eq!(slice_text("日本語", 3), "日本語");
    }
}
