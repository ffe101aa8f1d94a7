//! Lenient readers for untrusted JSON values.
//!
//! The analysis payload comes back from an external model and fields may be
//! missing, null, stringly-typed or simply wrong. These helpers always
//! produce a value: the documented default when nothing usable is found.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a number, accepting numeric strings. Anything else (including NaN
/// and infinities) reads as `0.0`.
pub fn number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if n.is_finite() { n } else { 0.0 }
}

/// Read a string. Numbers and booleans are rendered; null and containers
/// read as an empty string.
pub fn string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Read a list of strings. Non-array values read as an empty list and
/// non-string entries are dropped.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Look up the first present key among `keys` in a JSON object.
pub fn field<'a>(value: &'a Value, keys: &[&str]) -> &'a Value {
    keys.iter()
        .find_map(|k| value.get(*k))
        .unwrap_or(&Value::Null)
}

pub(crate) fn de_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value))
}

pub(crate) fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string(&value))
}

pub(crate) fn de_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_list(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn number_accepts_numbers_and_numeric_strings() {
        assert_eq!(number(&json!(7)), 7.0);
        assert_eq!(number(&json!(2.5)), 2.5);
        assert_eq!(number(&json!(" 42 ")), 42.0);
    }

    #[test]
    fn number_defaults_to_zero() {
        assert_eq!(number(&Value::Null), 0.0);
        assert_eq!(number(&json!("lots")), 0.0);
        assert_eq!(number(&json!([1, 2])), 0.0);
        assert_eq!(number(&json!("NaN")), 0.0);
        assert_eq!(number(&json!("inf")), 0.0);
    }

    #[test]
    fn string_list_drops_non_strings() {
        assert_eq!(
            string_list(&json!(["a", 1, null, "b"])),
            vec!["a".to_string(), "b".to_string()]
        );
        assert!(string_list(&json!("not a list")).is_empty());
    }

    #[test]
    fn field_prefers_first_key() {
        let v = json!({"redFlags": 3, "red_flags": 9});
        assert_eq!(number(field(&v, &["redFlags", "red_flags"])), 3.0);
        assert_eq!(number(field(&v, &["missing"])), 0.0);
    }
}
