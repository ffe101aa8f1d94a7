//! Rule tables for the heuristics
//!
//! Every keyword list the engine consults lives here as data. A [`RuleSet`]
//! starts from the built-in [`tables`] and may be extended (never shrunk)
//! with extra keywords, e.g. from a config file.
//!
//! ```
//! use chatlens_domain::rules::RuleSet;
//! use chatlens_domain::evidence::Category;
//!
//! let rules = RuleSet::default()
//!     .with_extra_keywords(Category::Pattern, ["like clockwork"]);
//! assert!(rules.evidence.keywords(Category::Pattern).contains(&"like clockwork".to_string()));
//! ```

pub mod tables;

use crate::evidence::Category;
use serde::{Deserialize, Serialize};

/// Trim, lowercase, drop blanks and duplicates, keep first-seen order.
fn normalize<I, S>(existing: &mut Vec<String>, extra: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for word in extra {
        let word = word.as_ref().trim().to_lowercase();
        if !word.is_empty() && !existing.contains(&word) {
            existing.push(word);
        }
    }
}

fn owned(table: &[&str]) -> Vec<String> {
    let mut out = Vec::with_capacity(table.len());
    normalize(&mut out, table);
    out
}

/// Rules for speaker candidate filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerRules {
    /// Lowercased names that are never accepted as speakers
    pub denylist: Vec<String>,
}

impl SpeakerRules {
    /// Whether `name` is a known export artifact (case-insensitive)
    pub fn is_denied(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.denylist.iter().any(|d| *d == lowered)
    }
}

impl Default for SpeakerRules {
    fn default() -> Self {
        Self {
            denylist: owned(tables::SPEAKER_DENYLIST),
        }
    }
}

/// Rules for metric derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsRules {
    /// Lowercased fragments marking a red-flag chip as a communication issue
    pub comm_issue_keywords: Vec<String>,
}

impl MetricsRules {
    /// Whether any chip mentions a communication issue (case-insensitive substring)
    pub fn has_comm_issue<S: AsRef<str>>(&self, chips: &[S]) -> bool {
        chips.iter().any(|chip| {
            let chip = chip.as_ref().to_lowercase();
            self.comm_issue_keywords.iter().any(|k| chip.contains(k.as_str()))
        })
    }
}

impl Default for MetricsRules {
    fn default() -> Self {
        Self {
            comm_issue_keywords: owned(tables::COMM_ISSUE_KEYWORDS),
        }
    }
}

/// Keyword sets used to score evidence, one per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRules {
    pub smoking_gun: Vec<String>,
    pub red_flag: Vec<String>,
    pub green_flag: Vec<String>,
    pub pattern: Vec<String>,
}

impl EvidenceRules {
    /// Keywords for a category
    pub fn keywords(&self, category: Category) -> &[String] {
        match category {
            Category::SmokingGun => &self.smoking_gun,
            Category::RedFlag => &self.red_flag,
            Category::GreenFlag => &self.green_flag,
            Category::Pattern => &self.pattern,
        }
    }

    fn keywords_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::SmokingGun => &mut self.smoking_gun,
            Category::RedFlag => &mut self.red_flag,
            Category::GreenFlag => &mut self.green_flag,
            Category::Pattern => &mut self.pattern,
        }
    }
}

impl Default for EvidenceRules {
    fn default() -> Self {
        Self {
            smoking_gun: owned(tables::SMOKING_GUN_KEYWORDS),
            red_flag: owned(tables::RED_FLAG_KEYWORDS),
            green_flag: owned(tables::GREEN_FLAG_KEYWORDS),
            pattern: owned(tables::PATTERN_KEYWORDS),
        }
    }
}

/// All rule tables consulted by the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub speakers: SpeakerRules,
    pub metrics: MetricsRules,
    pub evidence: EvidenceRules,
}

impl RuleSet {
    /// Add names to the speaker denylist
    pub fn with_extra_denylist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize(&mut self.speakers.denylist, names);
        self
    }

    /// Add communication-issue fragments
    pub fn with_extra_comm_issue_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize(&mut self.metrics.comm_issue_keywords, keywords);
        self
    }

    /// Add keywords to one evidence category
    pub fn with_extra_keywords<I, S>(mut self, category: Category, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        normalize(self.evidence.keywords_mut(category), keywords);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables_are_lowercase() {
        let rules = RuleSet::default();
        for word in rules
            .speakers
            .denylist
            .iter()
            .chain(&rules.metrics.comm_issue_keywords)
            .chain(&rules.evidence.smoking_gun)
        {
            assert_eq!(word, &word.to_lowercase());
        }
    }

    #[test]
    fn test_denylist_is_case_insensitive() {
        let rules = SpeakerRules::default();
        assert!(rules.is_denied("You"));
        assert!(rules.is_denied("DELIVERED"));
        assert!(rules.is_denied("Monday"));
        assert!(!rules.is_denied("Jordan"));
        assert!(!rules.is_denied("Me"));
    }

    #[test]
    fn test_extension_normalizes_and_dedups() {
        let rules = RuleSet::default().with_extra_denylist(["  Bot ", "bot", "", "YOU"]);
        let bots = rules.speakers.denylist.iter().filter(|d| *d == "bot").count();
        assert_eq!(bots, 1);
        assert_eq!(
            rules.speakers.denylist.len(),
            SpeakerRules::default().denylist.len() + 1
        );
    }

    #[test]
    fn test_comm_issue_detection() {
        let rules = MetricsRules::default();
        assert!(rules.has_comm_issue(&["Gives VAGUE answers"]));
        assert!(rules.has_comm_issue(&["ok", "Plan dodge on Friday"]));
        assert!(!rules.has_comm_issue(&["late replies"]));
        assert!(!rules.has_comm_issue::<&str>(&[]));
    }

    #[test]
    fn test_extra_evidence_keywords() {
        let rules = RuleSet::default().with_extra_keywords(Category::GreenFlag, ["Shows Up"]);
        assert!(
            rules
                .evidence
                .keywords(Category::GreenFlag)
                .contains(&"shows up".to_string())
        );
    }
}
