//! Output formatter trait

use super::console::ConsoleFormatter;
use super::json::JsonFormatter;
use chatlens_application::PreparedAnalysis;
use chatlens_domain::{OutputFormat, Reading};

/// Trait for formatting command results
pub trait OutputFormatter {
    /// Speaker candidates, role resolution and turns
    fn format_speakers(&self, prepared: &PreparedAnalysis) -> String;

    /// Format classification
    fn format_classification(&self, prepared: &PreparedAnalysis) -> String;

    /// The analysis request context
    fn format_request(&self, prepared: &PreparedAnalysis) -> String;

    /// A finished reading
    fn format_reading(&self, reading: &Reading) -> String;
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
