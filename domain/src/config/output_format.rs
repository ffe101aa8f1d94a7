//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Output format for readings and detection results
///
/// This is a domain concept representing how results should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable console output (default)
    #[default]
    Text,
    /// JSON output
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DomainError::UnknownOutputFormat(s.to_string())),
        }
    }
}
