//! Conversation text value object and char-safe truncation.

use serde::{Deserialize, Serialize};

/// Maximum number of characters any heuristic will scan.
pub const MAX_SCAN_CHARS: usize = 10_000;

/// Return the prefix of `s` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, not bytes, so a multi-byte character is
/// never split.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Raw conversation text as pasted by the user (Value Object)
///
/// Holds at most [`MAX_SCAN_CHARS`] characters; anything beyond that is
/// dropped on construction. The content is never modified afterwards.
///
/// # Example
///
/// ```
/// use chatlens_domain::ConversationText;
///
/// let text = ConversationText::new("Me: hi\nJordan: hey");
/// assert!(text.has_line_breaks());
/// assert!(!text.was_truncated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationText {
    content: String,
    truncated: bool,
}

impl ConversationText {
    /// Create a new conversation text, keeping only the scannable prefix
    pub fn new(content: impl AsRef<str>) -> Self {
        let raw = content.as_ref();
        let kept = truncate_chars(raw, MAX_SCAN_CHARS);
        Self {
            content: kept.to_string(),
            truncated: kept.len() < raw.len(),
        }
    }

    /// Get the (possibly truncated) content
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Whether the original input exceeded [`MAX_SCAN_CHARS`]
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    /// Whether the text spans more than one line
    pub fn has_line_breaks(&self) -> bool {
        self.content.contains('\n')
    }

    /// Number of characters held
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl std::fmt::Display for ConversationText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for ConversationText {
    fn from(s: &str) -> Self {
        ConversationText::new(s)
    }
}

impl From<String> for ConversationText {
    fn from(s: String) -> Self {
        ConversationText::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_ascii() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Each of these is 3 bytes; counting is per character
        assert_eq!(truncate_chars("あのね", 2), "あの");
        assert_eq!(truncate_chars("👋🌍🎉", 1), "👋");
    }

    #[test]
    fn test_long_input_is_truncated() {
        let long = "a".repeat(MAX_SCAN_CHARS + 50);
        let text = ConversationText::new(&long);
        assert!(text.was_truncated());
        assert_eq!(text.char_count(), MAX_SCAN_CHARS);
    }

    #[test]
    fn test_exact_limit_is_kept() {
        let exact = "é".repeat(MAX_SCAN_CHARS);
        let text = ConversationText::new(&exact);
        assert!(!text.was_truncated());
        assert_eq!(text.char_count(), MAX_SCAN_CHARS);
    }

    #[test]
    fn test_line_breaks() {
        assert!(ConversationText::from("a\nb").has_line_breaks());
        assert!(!ConversationText::from("a b").has_line_breaks());
    }
}
