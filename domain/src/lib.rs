//! Domain layer for chatlens
//!
//! This crate contains the heuristics that turn a pasted conversation and an
//! analysis result into a reading. Everything here is pure and synchronous;
//! it has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Pre-processing
//!
//! - **Speaker Identifier**: finds up to two speaker names in raw text
//! - **Format Classifier**: decides between conversation and narrative
//!
//! ## Post-processing
//!
//! - **Metrics Deriver**: turns raw scalars into tiered, display-ready scores
//! - **Evidence Prioritizer**: badges each quoted message by keyword voting

pub mod analysis;
pub mod config;
pub mod core;
pub mod evidence;
pub mod format;
pub mod metrics;
pub mod rules;
pub mod speaker;

// Re-export commonly used types
pub use analysis::{AnalysisPayload, AnalysisRequest, RankedEvidence, Reading};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    text::{ConversationText, MAX_SCAN_CHARS},
};
pub use evidence::{
    Category, EvidenceItem, PriorityClassification, Valence, positional_fallback, prioritize,
    prioritize_with,
};
pub use format::{FormatClassification, classify_format};
pub use metrics::{
    DerivedMetrics, MetricsInput, Tier, TierColor, TierLevel, derive_metrics, derive_metrics_with,
};
pub use rules::{EvidenceRules, MetricsRules, RuleSet, SpeakerRules};
pub use speaker::{
    Confidence, RoleResolution, SpeakerAssignment, SpeakerCandidate, Turn, TurnRole,
    assign_roles, attribute_turns, identify_speakers, identify_speakers_with,
};
