//! JSON output formatter

use super::formatter::OutputFormatter;
use chatlens_application::PreparedAnalysis;
use chatlens_domain::Reading;
use serde_json::{Value, json};

/// Formats results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn speakers_value(prepared: &PreparedAnalysis) -> Value {
        json!({
            "candidates": prepared.request.candidates,
            "resolution": prepared.resolution,
            "speakers": prepared.request.speakers,
            "needsSelfChoice": prepared.needs_self_choice(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_speakers(&self, prepared: &PreparedAnalysis) -> String {
        let mut value = Self::speakers_value(prepared);
        value["turns"] = json!(prepared.turns());
        Self::render(&value)
    }

    fn format_classification(&self, prepared: &PreparedAnalysis) -> String {
        Self::render(&json!({
            "format": prepared.request.format,
            "framingNote": prepared.request.framing_note,
            "truncated": prepared.request.text.was_truncated(),
        }))
    }

    fn format_request(&self, prepared: &PreparedAnalysis) -> String {
        let mut value = Self::speakers_value(prepared);
        value["hints"] = prepared.request.hints();
        value["framingNote"] = json!(prepared.request.framing_note);
        Self::render(&value)
    }

    fn format_reading(&self, reading: &Reading) -> String {
        serde_json::to_string_pretty(reading).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlens_application::{
        InterpretAnalysisInput, InterpretAnalysisUseCase, PrepareAnalysisInput,
        PrepareAnalysisUseCase,
    };
    use chatlens_domain::AnalysisPayload;

    fn prepared(text: &str) -> PreparedAnalysis {
        PrepareAnalysisUseCase::default().execute(PrepareAnalysisInput::new(text))
    }

    #[test]
    fn test_speakers_json() {
        let out = JsonFormatter.format_speakers(&prepared("Alex: hey\nJordan: hi"));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["resolution"]["status"], "unresolved");
        assert_eq!(value["candidates"][1]["name"], "Jordan");
        assert_eq!(value["needsSelfChoice"], true);
        assert_eq!(value["turns"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_classification_json() {
        let out = JsonFormatter.format_classification(&prepared("just a short story about us"));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["format"], "narrative");
        assert!(value["framingNote"].is_string());
    }

    #[test]
    fn test_reading_json() {
        let payload = AnalysisPayload::from_value(&json!({"redFlags": 9}));
        let reading =
            InterpretAnalysisUseCase::default().execute(InterpretAnalysisInput::standalone(payload));
        let value: Value = serde_json::from_str(&JsonFormatter.format_reading(&reading)).unwrap();
        assert_eq!(value["metrics"]["risk"]["level"], "HIGH");
        assert_eq!(value["hidden_evidence"], 0);
    }
}
