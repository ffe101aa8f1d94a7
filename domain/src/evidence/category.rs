//! Evidence categories, valence, and their static visual mapping.

use crate::core::error::DomainError;
use crate::metrics::TierColor;
use serde::{Deserialize, Serialize};

/// Severity category of a piece of evidence
///
/// Declaration order is the tie-break order when two categories score the
/// same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    SmokingGun,
    RedFlag,
    GreenFlag,
    Pattern,
}

impl Category {
    /// All categories in tie-break order
    pub const ALL: [Category; 4] = [
        Category::SmokingGun,
        Category::RedFlag,
        Category::GreenFlag,
        Category::Pattern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SmokingGun => "smoking_gun",
            Category::RedFlag => "red_flag",
            Category::GreenFlag => "green_flag",
            Category::Pattern => "pattern",
        }
    }

    /// Badge glyph shown next to the quote
    pub fn badge_glyph(&self) -> &'static str {
        match self {
            Category::SmokingGun => "🚨",
            Category::RedFlag => "🚩",
            Category::GreenFlag => "💚",
            Category::Pattern => "🔁",
        }
    }

    /// Badge label text
    pub fn label(&self) -> &'static str {
        match self {
            Category::SmokingGun => "SMOKING GUN",
            Category::RedFlag => "RED FLAG",
            Category::GreenFlag => "GREEN FLAG",
            Category::Pattern => "PATTERN",
        }
    }

    /// Styling tier of the badge
    pub fn tone(&self) -> TierColor {
        match self {
            Category::SmokingGun | Category::RedFlag => TierColor::Red,
            Category::GreenFlag => TierColor::Green,
            Category::Pattern => TierColor::Yellow,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall tone of a conversation, supplied by the analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Green,
    #[default]
    Neutral,
    Red,
}

impl Valence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Valence::Green => "green",
            Valence::Neutral => "neutral",
            Valence::Red => "red",
        }
    }

    /// Lenient parse for payload values; anything unknown is neutral
    pub fn from_loose(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Valence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Valence {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "green" | "positive" => Ok(Valence::Green),
            "neutral" | "mixed" => Ok(Valence::Neutral),
            "red" | "negative" => Ok(Valence::Red),
            _ => Err(DomainError::UnknownValence(s.to_string())),
        }
    }
}

/// Display classification assigned to one evidence item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityClassification {
    pub category: Category,
    pub badge_glyph: String,
    pub label: String,
    pub tone: TierColor,
    /// Distinct keywords matched for the winning category; 0 when the
    /// positional fallback decided
    pub signal: usize,
}

impl PriorityClassification {
    pub fn new(category: Category, signal: usize) -> Self {
        Self {
            category,
            badge_glyph: category.badge_glyph().to_string(),
            label: category.label().to_string(),
            tone: category.tone(),
            signal,
        }
    }

    /// Whether the category came from the positional fallback
    pub fn is_positional(&self) -> bool {
        self.signal == 0
    }
}
