//! Interpret Analysis use case.
//!
//! Runs the post-processing heuristics on an analysis payload: metric
//! derivation and evidence prioritization, then applies the visibility limit.

use crate::config::ReadingConfig;
use chatlens_domain::{
    AnalysisPayload, AnalysisRequest, FormatClassification, RankedEvidence, Reading,
    SpeakerAssignment, derive_metrics_with, prioritize_with,
};
use tracing::{debug, info};

/// Input for the [`InterpretAnalysisUseCase`].
#[derive(Debug, Clone)]
pub struct InterpretAnalysisInput {
    pub payload: AnalysisPayload,
    pub format: FormatClassification,
    pub speakers: SpeakerAssignment,
    /// Overrides the configured visibility limit when set.
    pub visible_limit: Option<usize>,
}

impl InterpretAnalysisInput {
    /// Interpret a payload without a prepared request (dialogue, default roles)
    pub fn standalone(payload: AnalysisPayload) -> Self {
        Self {
            payload,
            format: FormatClassification::Conversation,
            speakers: SpeakerAssignment::default(),
            visible_limit: None,
        }
    }

    /// Interpret a payload in the context of the request that produced it
    pub fn for_request(payload: AnalysisPayload, request: &AnalysisRequest) -> Self {
        Self {
            payload,
            format: request.format,
            speakers: request.speakers.clone(),
            visible_limit: None,
        }
    }

    pub fn with_visible_limit(mut self, limit: Option<usize>) -> Self {
        self.visible_limit = limit;
        self
    }
}

/// Use case for turning an analysis payload into a [`Reading`].
#[derive(Debug, Clone, Default)]
pub struct InterpretAnalysisUseCase {
    config: ReadingConfig,
}

impl InterpretAnalysisUseCase {
    pub fn new(config: ReadingConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self, input: InterpretAnalysisInput) -> Reading {
        let InterpretAnalysisInput {
            payload,
            format,
            speakers,
            visible_limit,
        } = input;

        let metrics = derive_metrics_with(&payload.metrics, &self.config.rules.metrics);
        // Classify everything first so positional fallbacks keep payload indices
        let classifications =
            prioritize_with(&payload.evidence, payload.valence, &self.config.rules.evidence);

        let (visible, hidden) = match visible_limit {
            Some(limit) => {
                let total = payload.evidence.len();
                let shown = limit.min(total);
                (shown, total - shown)
            }
            None => self.config.split_evidence(payload.evidence.len()),
        };

        let evidence: Vec<RankedEvidence> = payload
            .evidence
            .into_iter()
            .zip(classifications)
            .enumerate()
            .take(visible)
            .map(|(index, (item, classification))| RankedEvidence {
                index,
                item,
                classification,
            })
            .collect();

        info!(
            "Reading: risk {} ({}), {} evidence item(s) shown, {} hidden",
            metrics.risk.level, metrics.risk.score, visible, hidden
        );
        debug!(
            "Compatibility {} ({}), communication {} ({})",
            metrics.compatibility.level,
            metrics.compatibility.score,
            metrics.communication.level,
            metrics.communication.score
        );

        Reading {
            framing_note: format.framing_note().map(str::to_string),
            format,
            speakers,
            valence: payload.valence,
            metrics,
            evidence,
            hidden_evidence: hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlens_domain::{Category, RuleSet, TierLevel};
    use serde_json::json;

    fn payload() -> AnalysisPayload {
        AnalysisPayload::from_value(&json!({
            "redFlags": 10,
            "wastingTime": 20,
            "actuallyIntoYou": 90,
            "redFlagChips": [],
            "greenFlagChips": ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"],
            "evidence": [
                {"quote": "ok"},
                {"quote": "sure"},
                {"quote": "he lied about where he was", "annotationA": "gaslighting"},
                {"quote": "k"}
            ],
            "valence": "green"
        }))
    }

    #[test]
    fn test_interpret_metrics_and_limit() {
        let use_case = InterpretAnalysisUseCase::default();
        let reading = use_case.execute(InterpretAnalysisInput::standalone(payload()));

        assert_eq!(reading.metrics.risk.score, 5.0);
        assert_eq!(reading.metrics.risk.level, TierLevel::Medium);
        assert_eq!(reading.metrics.compatibility.level, TierLevel::Strong);
        assert_eq!(reading.evidence.len(), 3);
        assert_eq!(reading.hidden_evidence, 1);
        assert!(reading.framing_note.is_none());
    }

    #[test]
    fn test_interpret_keeps_payload_positions() {
        let use_case = InterpretAnalysisUseCase::default();
        let reading = use_case
            .execute(InterpretAnalysisInput::standalone(payload()).with_visible_limit(Some(10)));

        let categories: Vec<_> = reading
            .evidence
            .iter()
            .map(|e| e.classification.category)
            .collect();
        assert_eq!(
            categories,
            vec![
                Category::SmokingGun,
                Category::GreenFlag,
                Category::SmokingGun,
                Category::Pattern
            ]
        );
        assert_eq!(reading.evidence[3].index, 3);
        assert_eq!(reading.hidden_evidence, 0);
    }

    #[test]
    fn test_extra_keywords_change_ranking() {
        let rules = RuleSet::default().with_extra_keywords(Category::Pattern, ["sure"]);
        let use_case = InterpretAnalysisUseCase::new(
            ReadingConfig::default()
                .with_rules(rules)
                .with_visible_evidence_limit(None),
        );
        let reading = use_case.execute(InterpretAnalysisInput::standalone(payload()));
        assert_eq!(reading.evidence[1].classification.category, Category::Pattern);
        assert_eq!(reading.evidence.len(), 4);
    }

    #[test]
    fn test_narrative_reading_has_framing_note() {
        let use_case = InterpretAnalysisUseCase::default();
        let mut input = InterpretAnalysisInput::standalone(AnalysisPayload::default());
        input.format = FormatClassification::Narrative;
        let reading = use_case.execute(input);
        assert!(reading.framing_note.is_some());
        assert!(reading.evidence.is_empty());
        assert_eq!(reading.metrics.risk.level, TierLevel::Low);
    }
}
