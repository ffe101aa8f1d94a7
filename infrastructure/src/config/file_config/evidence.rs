//! Evidence configuration from TOML (`[evidence]` section)

use super::blank_keyword_issues;
use chatlens_application::DEFAULT_VISIBLE_EVIDENCE;
use chatlens_domain::{Category, ConfigIssue, ConfigIssueCode, RuleSet};
use serde::{Deserialize, Serialize};

/// Raw evidence configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvidenceConfig {
    /// Evidence items shown per reading
    pub visible_limit: usize,
    /// Show every item regardless of `visible_limit`
    pub show_all: bool,
    pub extra_smoking_gun: Vec<String>,
    pub extra_red_flag: Vec<String>,
    pub extra_green_flag: Vec<String>,
    pub extra_pattern: Vec<String>,
}

impl Default for FileEvidenceConfig {
    fn default() -> Self {
        Self {
            visible_limit: DEFAULT_VISIBLE_EVIDENCE,
            show_all: false,
            extra_smoking_gun: Vec::new(),
            extra_red_flag: Vec::new(),
            extra_green_flag: Vec::new(),
            extra_pattern: Vec::new(),
        }
    }
}

impl FileEvidenceConfig {
    /// The visibility limit handed to the use cases; `None` means unlimited
    pub fn visible_limit(&self) -> Option<usize> {
        (!self.show_all).then_some(self.visible_limit)
    }

    fn extras(&self) -> [(Category, &'static str, &[String]); 4] {
        [
            (
                Category::SmokingGun,
                "evidence.extra_smoking_gun",
                &self.extra_smoking_gun,
            ),
            (Category::RedFlag, "evidence.extra_red_flag", &self.extra_red_flag),
            (
                Category::GreenFlag,
                "evidence.extra_green_flag",
                &self.extra_green_flag,
            ),
            (Category::Pattern, "evidence.extra_pattern", &self.extra_pattern),
        ]
    }

    pub(super) fn apply(&self, mut rules: RuleSet) -> RuleSet {
        for (category, _, extra) in self.extras() {
            rules = rules.with_extra_keywords(category, extra);
        }
        rules
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (_, field, extra) in self.extras() {
            issues.extend(blank_keyword_issues(field, extra));
        }
        if self.visible_limit == 0 && !self.show_all {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroEvidenceLimit,
                "evidence.visible_limit is 0: readings will show no evidence",
            ));
        }
        issues
    }
}
