//! Prepare Analysis use case.
//!
//! Runs the pre-processing heuristics on pasted text: speaker
//! identification, role assignment and format classification. The result is
//! the [`AnalysisRequest`] handed to the external analysis, plus the role
//! resolution so the caller can ask "which one are you?" when needed.

use crate::config::ReadingConfig;
use chatlens_domain::{
    AnalysisRequest, ConversationText, RoleResolution, Turn, assign_roles, attribute_turns,
    classify_format, identify_speakers_with,
};
use tracing::{debug, info};

/// Input for the [`PrepareAnalysisUseCase`].
#[derive(Debug, Clone)]
pub struct PrepareAnalysisInput {
    /// The pasted text, untruncated.
    pub text: String,
    /// Which speaker the user says they are, if known.
    pub self_hint: Option<String>,
}

impl PrepareAnalysisInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            self_hint: None,
        }
    }

    pub fn with_self_hint(mut self, hint: impl Into<String>) -> Self {
        self.self_hint = Some(hint.into());
        self
    }
}

/// Output of the [`PrepareAnalysisUseCase`].
#[derive(Debug, Clone)]
pub struct PreparedAnalysis {
    /// Request context; unresolved roles fall back to `Me`/`Them` here.
    pub request: AnalysisRequest,
    /// How the roles were settled.
    pub resolution: RoleResolution,
}

impl PreparedAnalysis {
    /// Unresolved roles on dialogue-shaped text need the user's input
    pub fn needs_self_choice(&self) -> bool {
        !self.resolution.is_resolved() && self.request.format.is_conversation()
    }

    /// Apply the user's explicit answer to "which one are you?"
    pub fn choose_self(mut self, self_choice: &str) -> Self {
        let assignment = self.resolution.clone().resolve_with(self_choice);
        self.request.speakers = assignment.clone();
        self.resolution = RoleResolution::Resolved(assignment);
        self
    }

    /// The text split into turns under the current speaker assignment
    pub fn turns(&self) -> Vec<Turn> {
        attribute_turns(self.request.text.as_str(), &self.request.speakers)
    }
}

/// Use case for pre-processing pasted text.
///
/// Speaker and format detection run sequentially; both are pure.
#[derive(Debug, Clone, Default)]
pub struct PrepareAnalysisUseCase {
    config: ReadingConfig,
}

impl PrepareAnalysisUseCase {
    pub fn new(config: ReadingConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: PrepareAnalysisInput) -> PreparedAnalysis {
        let text = ConversationText::new(&input.text);
        if text.was_truncated() {
            info!(
                "Input truncated to {} characters for detection",
                text.char_count()
            );
        }

        let candidates = identify_speakers_with(text.as_str(), &self.config.rules.speakers);
        let resolution = assign_roles(&candidates, input.self_hint.as_deref());
        let format = classify_format(text.as_str());
        debug!(
            "Prepared analysis: format={}, candidates={}, resolved={}",
            format,
            candidates.len(),
            resolution.is_resolved()
        );

        let speakers = resolution.clone().finalize_with_defaults();
        PreparedAnalysis {
            request: AnalysisRequest::new(text, format, candidates, speakers),
            resolution,
        }
    }
}
