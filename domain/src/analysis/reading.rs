//! Presentation-ready result of interpreting an analysis payload.

use crate::evidence::{Category, EvidenceItem, PriorityClassification, Valence};
use crate::format::FormatClassification;
use crate::metrics::DerivedMetrics;
use crate::speaker::SpeakerAssignment;
use serde::{Deserialize, Serialize};

/// An evidence item together with its badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEvidence {
    /// Position in the payload's evidence list
    pub index: usize,
    pub item: EvidenceItem,
    pub classification: PriorityClassification,
}

/// The final reading handed to presentation code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub format: FormatClassification,
    pub speakers: SpeakerAssignment,
    pub framing_note: Option<String>,
    pub valence: Valence,
    pub metrics: DerivedMetrics,
    /// Visible evidence, in payload order
    pub evidence: Vec<RankedEvidence>,
    /// Evidence items withheld by the visibility limit
    pub hidden_evidence: usize,
}

impl Reading {
    /// Evidence badges of one category
    pub fn evidence_in(&self, category: Category) -> impl Iterator<Item = &RankedEvidence> {
        self.evidence
            .iter()
            .filter(move |e| e.classification.category == category)
    }
}
