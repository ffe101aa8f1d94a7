//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod analysis;
mod evidence;
mod metrics;
mod output;
mod speakers;

pub use analysis::FileAnalysisConfig;
pub use evidence::FileEvidenceConfig;
pub use metrics::FileMetricsConfig;
pub use output::FileOutputConfig;
pub use speakers::FileSpeakersConfig;

use chatlens_application::ReadingConfig;
use chatlens_domain::{ConfigIssue, ConfigIssueCode, RuleSet};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Evidence visibility and keyword extensions
    pub evidence: FileEvidenceConfig,
    /// Speaker denylist extensions
    pub speakers: FileSpeakersConfig,
    /// Communication-issue keyword extensions
    pub metrics: FileMetricsConfig,
    /// Analysis call settings
    pub analysis: FileAnalysisConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Issues never stop the engine: blank keywords are skipped when the
    /// rule tables are built, and a zero evidence limit is honoured.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.speakers.validate());
        issues.extend(self.metrics.validate());
        issues.extend(self.evidence.validate());
        issues
    }

    /// Built-in rule tables extended with the configured keywords
    pub fn rule_set(&self) -> RuleSet {
        let rules = self.speakers.apply(RuleSet::default());
        let rules = self.metrics.apply(rules);
        self.evidence.apply(rules)
    }

    /// Application configuration for the reading use cases
    pub fn reading_config(&self) -> ReadingConfig {
        ReadingConfig::default()
            .with_rules(self.rule_set())
            .with_visible_evidence_limit(self.evidence.visible_limit())
            .with_gateway_timeout_seconds(self.analysis.timeout_seconds())
    }
}

/// One warning per blank entry in a keyword list
fn blank_keyword_issues(field: &str, keywords: &[String]) -> Vec<ConfigIssue> {
    keywords
        .iter()
        .enumerate()
        .filter(|(_, k)| k.trim().is_empty())
        .map(|(i, _)| {
            ConfigIssue::warning(
                ConfigIssueCode::BlankKeyword {
                    field: field.to_string(),
                },
                format!("{}[{}] is blank and will be ignored", field, i),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlens_domain::{Category, OutputFormat};
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[output]
format = "json"
color = false

[evidence]
visible_limit = 5
extra_smoking_gun = ["burner phone"]

[speakers]
extra_denylist = ["Siri"]

[metrics]
extra_comm_issue_keywords = ["left on read"]

[analysis]
timeout_seconds = 10
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(config.evidence.visible_limit(), Some(5));

        let reading = config.reading_config();
        assert_eq!(reading.visible_evidence_limit, Some(5));
        assert_eq!(reading.gateway_timeout, Some(Duration::from_secs(10)));
        assert!(reading.rules.speakers.is_denied("siri"));
        assert!(
            reading
                .rules
                .metrics
                .has_comm_issue(&["Left on read twice"])
        );
        assert!(
            reading
                .rules
                .evidence
                .keywords(Category::SmokingGun)
                .contains(&"burner phone".to_string())
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[evidence]
show_all = true
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.evidence.visible_limit(), None);
        // Defaults should apply
        assert!(config.output.format.is_none());
        assert!(config.output.color);
        assert_eq!(config.analysis.timeout_seconds(), Some(60));
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.rule_set(), RuleSet::default());
        assert_eq!(config.reading_config().visible_evidence_limit, Some(3));
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_blank_keywords() {
        let toml_str = r#"
[speakers]
extra_denylist = ["ok", "  "]

[evidence]
extra_pattern = [""]
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| !i.is_error()));
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::BlankKeyword {
                field: "speakers.extra_denylist".to_string()
            }
        );
        assert_eq!(issues[0].message, "speakers.extra_denylist[1] is blank and will be ignored");
    }

    #[test]
    fn test_zero_timeout_disables() {
        let config: FileConfig = toml::from_str("[analysis]\ntimeout_seconds = 0").unwrap();
        assert!(config.reading_config().gateway_timeout.is_none());
    }
}
