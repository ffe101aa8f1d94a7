//! Speaker configuration from TOML (`[speakers]` section)

use super::blank_keyword_issues;
use chatlens_domain::{ConfigIssue, RuleSet};
use serde::{Deserialize, Serialize};

/// Raw speaker configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeakersConfig {
    /// Extra names never accepted as speakers (e.g. app-specific labels)
    pub extra_denylist: Vec<String>,
}

impl FileSpeakersConfig {
    pub(super) fn apply(&self, rules: RuleSet) -> RuleSet {
        rules.with_extra_denylist(&self.extra_denylist)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        blank_keyword_issues("speakers.extra_denylist", &self.extra_denylist)
    }
}
