//! Metrics configuration from TOML (`[metrics]` section)

use super::blank_keyword_issues;
use chatlens_domain::{ConfigIssue, RuleSet};
use serde::{Deserialize, Serialize};

/// Raw metrics configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMetricsConfig {
    /// Extra red-flag chip fragments that count as communication issues
    pub extra_comm_issue_keywords: Vec<String>,
}

impl FileMetricsConfig {
    pub(super) fn apply(&self, rules: RuleSet) -> RuleSet {
        rules.with_extra_comm_issue_keywords(&self.extra_comm_issue_keywords)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        blank_keyword_issues(
            "metrics.extra_comm_issue_keywords",
            &self.extra_comm_issue_keywords,
        )
    }
}
