//! Input format classification
//!
//! Decides whether pasted text is a structured chat (`Conversation`) or a
//! first-person account (`Narrative`). The outcome only changes how the
//! reading is framed; narrative input is still analysed.
//!
//! Two independent signals are required before text counts as a chat, so a
//! single colon in prose ("She said: leave me alone") stays narrative.

use crate::core::text::{MAX_SCAN_CHARS, truncate_chars};
use crate::rules::tables::NARRATIVE_FRAMING_NOTE;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::warn;

/// Texts shorter than this carry too little signal to be a conversation
pub const MIN_CONVERSATION_CHARS: usize = 10;

/// Pattern hits needed to call text a conversation
const PATTERN_THRESHOLD: usize = 2;
/// Non-blank lines needed for the line-shape fallback
const MIN_LINES: usize = 3;
/// Lines containing `": "` needed for the line-shape fallback
const MIN_COLON_LINES: usize = 2;

/// Format of a pasted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatClassification {
    /// Multi-party chat with speaker prefixes
    Conversation,
    /// Free-form story told by the user
    #[default]
    Narrative,
}

impl FormatClassification {
    pub fn is_conversation(&self) -> bool {
        matches!(self, FormatClassification::Conversation)
    }

    /// Disclaimer shown alongside readings of this format
    pub fn framing_note(&self) -> Option<&'static str> {
        match self {
            FormatClassification::Conversation => None,
            FormatClassification::Narrative => Some(NARRATIVE_FRAMING_NOTE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatClassification::Conversation => "conversation",
            FormatClassification::Narrative => "narrative",
        }
    }
}

impl std::fmt::Display for FormatClassification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The four structural shapes: name/colon and name/timestamp/colon, each
/// anchored at the start of the text and after a newline.
static STRUCTURE_PATTERNS: LazyLock<Result<[Regex; 4], regex::Error>> = LazyLock::new(|| {
    const NAME: &str = r"\p{L}[\p{L} '’\-]{0,29}";
    const STAMP: &str = r"\s*[\(\[][^\)\]\n]*[\)\]]";
    Ok([
        Regex::new(&format!(r"\A\s*{NAME}:\s*\S"))?,
        Regex::new(&format!(r"\A\s*{NAME}{STAMP}\s*:\s*\S"))?,
        Regex::new(&format!(r"\n[ \t]*{NAME}:\s*\S"))?,
        Regex::new(&format!(r"\n[ \t]*{NAME}{STAMP}\s*:\s*\S"))?,
    ])
});

fn structure_hits(text: &str) -> Option<usize> {
    match &*STRUCTURE_PATTERNS {
        Ok(patterns) => Some(patterns.iter().map(|p| p.find_iter(text).count()).sum()),
        Err(e) => {
            warn!("Format patterns unavailable: {}", e);
            None
        }
    }
}

/// Classify pasted text as a conversation or a narrative.
///
/// # Example
///
/// ```
/// use chatlens_domain::format::{classify_format, FormatClassification};
///
/// assert_eq!(classify_format(""), FormatClassification::Narrative);
/// assert_eq!(
///     classify_format("Sam: are we still on?\nAlex: maybe"),
///     FormatClassification::Conversation
/// );
/// ```
pub fn classify_format(text: &str) -> FormatClassification {
    let text = truncate_chars(text, MAX_SCAN_CHARS);
    if text.chars().count() < MIN_CONVERSATION_CHARS {
        return FormatClassification::Narrative;
    }

    let Some(hits) = structure_hits(text) else {
        return FormatClassification::Narrative;
    };
    if hits >= PATTERN_THRESHOLD {
        return FormatClassification::Conversation;
    }

    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let colon_lines = lines.iter().filter(|l| l.contains(": ")).count();
    if lines.len() >= MIN_LINES && colon_lines >= MIN_COLON_LINES {
        return FormatClassification::Conversation;
    }

    FormatClassification::Narrative
}
