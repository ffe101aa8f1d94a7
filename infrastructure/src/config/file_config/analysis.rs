//! Analysis configuration from TOML (`[analysis]` section)

use serde::{Deserialize, Serialize};

/// Raw analysis-call configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnalysisConfig {
    /// Timeout in seconds for the analysis call; 0 disables it
    pub timeout_seconds: u64,
}

impl Default for FileAnalysisConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 60,
        }
    }
}

impl FileAnalysisConfig {
    pub fn timeout_seconds(&self) -> Option<u64> {
        (self.timeout_seconds > 0).then_some(self.timeout_seconds)
    }
}
