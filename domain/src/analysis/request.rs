//! Outgoing analysis request context.

use crate::core::text::ConversationText;
use crate::format::FormatClassification;
use crate::speaker::{SpeakerAssignment, SpeakerCandidate};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Everything the pre-processing stage knows about a pasted text, bundled
/// for the external analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: ConversationText,
    pub format: FormatClassification,
    pub candidates: Vec<SpeakerCandidate>,
    pub speakers: SpeakerAssignment,
    /// Disclaimer to show with the reading, if any
    pub framing_note: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        text: ConversationText,
        format: FormatClassification,
        candidates: Vec<SpeakerCandidate>,
        speakers: SpeakerAssignment,
    ) -> Self {
        Self {
            framing_note: format.framing_note().map(str::to_string),
            text,
            format,
            candidates,
            speakers,
        }
    }

    /// Hints embedded alongside the raw text in the analysis call
    ///
    /// ```
    /// use chatlens_domain::analysis::AnalysisRequest;
    /// use chatlens_domain::{ConversationText, FormatClassification, SpeakerAssignment};
    ///
    /// let request = AnalysisRequest::new(
    ///     ConversationText::new("Me: hi\nJordan: hey"),
    ///     FormatClassification::Conversation,
    ///     vec![],
    ///     SpeakerAssignment::new("Me", "Jordan"),
    /// );
    /// let hints = request.hints();
    /// assert_eq!(hints["format"], "conversation");
    /// assert_eq!(hints["otherName"], "Jordan");
    /// ```
    pub fn hints(&self) -> Value {
        json!({
            "format": self.format.as_str(),
            "selfName": self.speakers.self_name,
            "otherName": self.speakers.other_name,
            "truncated": self.text.was_truncated(),
        })
    }
}
