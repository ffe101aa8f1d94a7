//! Presentation-level configuration
//!
//! Configuration for output formatting and progress display.

use crate::cli::commands::OutputFormat as CliOutputFormat;
use chatlens_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Start from file settings
    pub fn from_file(format: Option<OutputFormat>, color: bool, show_progress: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
            show_progress,
        }
    }

    /// Apply command-line flags, which always win over file settings
    pub fn with_cli_overrides(
        mut self,
        output: Option<CliOutputFormat>,
        no_color: bool,
        quiet: bool,
    ) -> Self {
        if let Some(output) = output {
            self.format = output.into();
        }
        if no_color {
            self.color = false;
        }
        if quiet {
            self.show_progress = false;
        }
        // Progress would interleave with machine-readable output
        if self.format == OutputFormat::Json {
            self.show_progress = false;
        }
        self
    }
}
