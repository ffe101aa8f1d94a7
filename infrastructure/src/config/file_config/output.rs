//! `[output]` section: how readings are rendered

use chatlens_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Rendering preferences. CLI flags override every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `text` or `json`; unset means text
    pub format: Option<OutputFormat>,
    /// Colored console output
    pub color: bool,
    /// Spinner while the analysis runs (never shown for JSON)
    pub progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;

    #[test]
    fn test_defaults_render_colored_text_with_progress() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config.output, FileOutputConfig::default());
        assert!(config.output.format.is_none());
        assert!(config.output.progress);
    }

    #[test]
    fn test_json_without_progress() {
        let config: FileConfig = toml::from_str(
            r#"
[output]
format = "json"
progress = false
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.output.color);
        assert!(!config.output.progress);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result: Result<FileConfig, _> = toml::from_str("[output]\nformat = \"yaml\"");
        assert!(result.is_err());
    }
}
