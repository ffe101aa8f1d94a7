//! Reading configuration: rule tables and use-case knobs.
//!
//! [`ReadingConfig`] groups what the use cases need beyond their inputs:
//! the (possibly extended) rule tables, how many evidence items a reading
//! shows, and how long to wait for the analysis gateway.

use chatlens_domain::RuleSet;
use std::time::Duration;

/// Default number of evidence items shown before the rest are withheld.
pub const DEFAULT_VISIBLE_EVIDENCE: usize = 3;

/// Configuration for the preparation and interpretation use cases.
#[derive(Debug, Clone)]
pub struct ReadingConfig {
    /// Keyword and denylist tables used by every component.
    pub rules: RuleSet,
    /// Evidence items shown in a reading; `None` shows all of them.
    pub visible_evidence_limit: Option<usize>,
    /// Maximum time to wait for the analysis gateway.
    pub gateway_timeout: Option<Duration>,
}

impl Default for ReadingConfig {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            visible_evidence_limit: Some(DEFAULT_VISIBLE_EVIDENCE),
            gateway_timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl ReadingConfig {
    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_visible_evidence_limit(mut self, limit: Option<usize>) -> Self {
        self.visible_evidence_limit = limit;
        self
    }

    pub fn with_gateway_timeout_seconds(mut self, seconds: Option<u64>) -> Self {
        self.gateway_timeout = seconds.map(Duration::from_secs);
        self
    }

    /// Split `total` evidence items into (visible, hidden) counts
    pub fn split_evidence(&self, total: usize) -> (usize, usize) {
        let visible = self.visible_evidence_limit.map_or(total, |limit| limit.min(total));
        (visible, total - visible)
    }
}
