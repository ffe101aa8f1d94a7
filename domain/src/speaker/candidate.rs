//! Speaker candidate value object

use serde::{Deserialize, Serialize};

/// How a candidate name was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Prefix at the start of its own line (`Name: text`)
    Explicit,
    /// Found by scanning single-line text, where line starts are unknown
    Inferred,
}

/// A name-like token that plausibly identifies a conversation participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerCandidate {
    pub name: String,
    /// Zero-based line the name was first seen on
    pub source_line_index: usize,
    pub confidence: Confidence,
}

impl SpeakerCandidate {
    pub fn new(name: impl Into<String>, source_line_index: usize, confidence: Confidence) -> Self {
        Self {
            name: name.into(),
            source_line_index,
            confidence,
        }
    }

    /// Create an explicit candidate
    pub fn explicit(name: impl Into<String>, source_line_index: usize) -> Self {
        Self::new(name, source_line_index, Confidence::Explicit)
    }

    /// Create an inferred candidate
    pub fn inferred(name: impl Into<String>) -> Self {
        Self::new(name, 0, Confidence::Inferred)
    }
}

impl std::fmt::Display for SpeakerCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
