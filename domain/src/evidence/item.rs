//! Quoted evidence item from the analysis payload.

use crate::core::lenient::de_string;
use serde::{Deserialize, Serialize};

/// One quoted message plus the analysis' three free-text annotations
///
/// Missing or malformed fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EvidenceItem {
    #[serde(deserialize_with = "de_string")]
    pub quote: String,
    #[serde(deserialize_with = "de_string")]
    pub annotation_a: String,
    #[serde(deserialize_with = "de_string")]
    pub annotation_b: String,
    #[serde(deserialize_with = "de_string")]
    pub annotation_c: String,
}

impl EvidenceItem {
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            ..Default::default()
        }
    }

    pub fn with_annotations(
        mut self,
        a: impl Into<String>,
        b: impl Into<String>,
        c: impl Into<String>,
    ) -> Self {
        self.annotation_a = a.into();
        self.annotation_b = b.into();
        self.annotation_c = c.into();
        self
    }

    /// Quote and annotations, lowercased and space-joined
    pub fn combined_text(&self) -> String {
        [
            self.quote.as_str(),
            self.annotation_a.as_str(),
            self.annotation_b.as_str(),
            self.annotation_c.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}
