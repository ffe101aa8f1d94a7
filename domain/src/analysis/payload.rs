//! Incoming analysis payload, parsed leniently.

use crate::core::lenient::{self, field};
use crate::evidence::{EvidenceItem, Valence};
use crate::metrics::MetricsInput;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// The slices of the external analysis result this engine consumes
///
/// Parsing never fails: absent or malformed parts fall back to defaults.
/// Metric scalars are read either from a nested `metrics` object or from the
/// top level.
///
/// ```
/// use chatlens_domain::analysis::AnalysisPayload;
/// use chatlens_domain::evidence::Valence;
/// use serde_json::json;
///
/// let payload = AnalysisPayload::from_value(&json!({
///     "redFlags": 6,
///     "greenFlagChips": ["asks questions"],
///     "evidence": [{"quote": "maybe"}, "garbage"],
///     "valence": "red"
/// }));
/// assert_eq!(payload.metrics.red_flags, 6.0);
/// assert_eq!(payload.evidence.len(), 1);
/// assert_eq!(payload.valence, Valence::Red);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisPayload {
    pub metrics: MetricsInput,
    pub evidence: Vec<EvidenceItem>,
    pub valence: Valence,
}

impl AnalysisPayload {
    /// Read a payload out of any JSON value
    pub fn from_value(value: &Value) -> Self {
        let metrics_source = match value.get("metrics") {
            Some(nested @ Value::Object(_)) => nested,
            _ => value,
        };
        // Structs would also accept a JSON array positionally; only objects count
        let metrics = if metrics_source.is_object() {
            MetricsInput::deserialize(metrics_source).unwrap_or_default()
        } else {
            MetricsInput::default()
        };

        let evidence = match field(value, &["evidence", "receipts"]) {
            Value::Array(items) => items
                .iter()
                .filter(|v| v.is_object())
                .filter_map(|v| EvidenceItem::deserialize(v).ok())
                .collect(),
            _ => Vec::new(),
        };

        let valence = Valence::from_loose(&lenient::string(field(
            value,
            &["valence", "overallValence"],
        )));

        debug!(
            "Parsed analysis payload: {} evidence item(s), valence {}",
            evidence.len(),
            valence
        );
        Self {
            metrics,
            evidence,
            valence,
        }
    }

    /// Parse a JSON string; unparseable input yields the default payload
    pub fn from_json_str(s: &str) -> Self {
        match serde_json::from_str::<Value>(s) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                debug!("Analysis payload is not JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

impl<'de> Deserialize<'de> for AnalysisPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_metrics() {
        let payload = AnalysisPayload::from_value(&json!({
            "metrics": {"wastingTime": 40, "actuallyIntoYou": "70"},
        }));
        assert_eq!(payload.metrics.wasting_time, 40.0);
        assert_eq!(payload.metrics.actually_into_you, 70.0);
        assert!(payload.evidence.is_empty());
        assert_eq!(payload.valence, Valence::Neutral);
    }

    #[test]
    fn test_non_object_payloads_default() {
        assert_eq!(AnalysisPayload::from_value(&json!(null)), AnalysisPayload::default());
        assert_eq!(AnalysisPayload::from_value(&json!([1, 2])), AnalysisPayload::default());
        assert_eq!(AnalysisPayload::from_json_str("not json"), AnalysisPayload::default());
    }

    #[test]
    fn test_receipts_alias() {
        let payload = AnalysisPayload::from_value(&json!({
            "receipts": [{"quote": "I was busy", "annotationA": "excuse"}],
            "overallValence": "green",
        }));
        assert_eq!(payload.evidence[0].annotation_a, "excuse");
        assert_eq!(payload.valence, Valence::Green);
    }

    #[test]
    fn test_serialized_payload_reads_back() {
        let payload = AnalysisPayload {
            metrics: MetricsInput {
                red_flags: 3.0,
                ..Default::default()
            },
            evidence: vec![EvidenceItem::new("hi")],
            valence: Valence::Red,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: AnalysisPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}
