//! Tier value objects and the static tier tables.

use serde::{Deserialize, Serialize};

/// Named bucket a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TierLevel {
    Low,
    Medium,
    High,
    Strong,
    Moderate,
    Mixed,
    Poor,
}

impl TierLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierLevel::Low => "LOW",
            TierLevel::Medium => "MEDIUM",
            TierLevel::High => "HIGH",
            TierLevel::Strong => "STRONG",
            TierLevel::Moderate => "MODERATE",
            TierLevel::Mixed => "MIXED",
            TierLevel::Poor => "POOR",
        }
    }
}

impl std::fmt::Display for TierLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display color of a tier (yellow doubles as orange)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierColor {
    Green,
    Yellow,
    Red,
}

/// A scored, presentation-ready tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub level: TierLevel,
    pub score: f64,
    pub color: TierColor,
    pub display_text: String,
    pub bar_width_percent: f64,
}

/// Risk tier row: applies while `effective_red <= max`
pub(crate) struct RiskRow {
    pub max: f64,
    pub level: TierLevel,
    pub bar_width_percent: f64,
    pub color: TierColor,
    pub display_text: &'static str,
}

/// Percentage tier row: applies once `score >= min`
pub(crate) struct ScoreRow {
    pub min: f64,
    pub level: TierLevel,
    pub color: TierColor,
    pub display_text: &'static str,
}

pub(crate) const RISK_TIERS: &[RiskRow] = &[
    RiskRow {
        max: 3.0,
        level: TierLevel::Low,
        bar_width_percent: 25.0,
        color: TierColor::Green,
        display_text: "Low risk. Nothing here suggests you're being played.",
    },
    RiskRow {
        max: 7.0,
        level: TierLevel::Medium,
        bar_width_percent: 60.0,
        color: TierColor::Yellow,
        display_text: "Proceed with caution. Some of this behaviour deserves a closer look.",
    },
    RiskRow {
        max: f64::INFINITY,
        level: TierLevel::High,
        bar_width_percent: 85.0,
        color: TierColor::Red,
        display_text: "High risk. The warning signs outweigh the good.",
    },
];

pub(crate) const COMPATIBILITY_TIERS: &[ScoreRow] = &[
    ScoreRow {
        min: 70.0,
        level: TierLevel::Strong,
        color: TierColor::Green,
        display_text: "Strong match. Interest and effort look mutual.",
    },
    ScoreRow {
        min: 40.0,
        level: TierLevel::Moderate,
        color: TierColor::Yellow,
        display_text: "Some chemistry, but the effort is uneven.",
    },
    ScoreRow {
        min: f64::NEG_INFINITY,
        level: TierLevel::Poor,
        color: TierColor::Red,
        display_text: "Low compatibility. Their interest isn't matching yours.",
    },
];

pub(crate) const COMMUNICATION_TIERS: &[ScoreRow] = &[
    ScoreRow {
        min: 70.0,
        level: TierLevel::Strong,
        color: TierColor::Green,
        display_text: "Clear, consistent communication.",
    },
    ScoreRow {
        min: 40.0,
        level: TierLevel::Mixed,
        color: TierColor::Yellow,
        display_text: "Mixed signals. Replies come, but not always straight.",
    },
    ScoreRow {
        min: f64::NEG_INFINITY,
        level: TierLevel::Poor,
        color: TierColor::Red,
        display_text: "Poor communication. Expect vague answers and dodged plans.",
    },
];

/// Round to two decimals so float noise never leaks into output
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Tier {
    pub(crate) fn from_risk(effective_red: f64) -> Self {
        // The last row is unbounded, so a row is always found
        let row = RISK_TIERS
            .iter()
            .find(|r| effective_red <= r.max)
            .unwrap_or(&RISK_TIERS[RISK_TIERS.len() - 1]);
        Self {
            level: row.level,
            score: round2(effective_red),
            color: row.color,
            display_text: row.display_text.to_string(),
            bar_width_percent: row.bar_width_percent,
        }
    }

    pub(crate) fn from_percentage(score: f64, table: &[ScoreRow]) -> Self {
        let row = table
            .iter()
            .find(|r| score >= r.min)
            .unwrap_or(&table[table.len() - 1]);
        Self {
            level: row.level,
            score: round2(score),
            color: row.color,
            display_text: row.display_text.to_string(),
            bar_width_percent: round2(score),
        }
    }
}
