//! Raw metric scalars from the analysis payload.

use crate::core::lenient::{de_number, de_string_list};
use serde::{Deserialize, Serialize};

/// Declared range of `red_flags`
pub const RED_FLAGS_MAX: f64 = 10.0;
/// Declared range of the percentage scalars
pub const PERCENT_MAX: f64 = 100.0;

/// Raw inputs for metric derivation
///
/// Untrusted: every field defaults when absent, null or malformed (see
/// [`crate::core::lenient`]), and [`MetricsInput::sanitized`] clamps scalars
/// into their declared ranges.
///
/// ```
/// use chatlens_domain::metrics::MetricsInput;
///
/// let input: MetricsInput =
///     serde_json::from_str(r#"{"redFlags": "4", "wastingTime": null}"#).unwrap();
/// assert_eq!(input.red_flags, 4.0);
/// assert_eq!(input.wasting_time, 0.0);
/// assert!(input.green_flag_chips.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsInput {
    /// Count-like red-flag severity, 0-10
    #[serde(deserialize_with = "de_number")]
    pub red_flags: f64,
    /// How much of the user's time is being wasted, 0-100
    #[serde(deserialize_with = "de_number")]
    pub wasting_time: f64,
    /// How interested the other party appears, 0-100
    #[serde(deserialize_with = "de_number")]
    pub actually_into_you: f64,
    #[serde(deserialize_with = "de_string_list")]
    pub red_flag_chips: Vec<String>,
    #[serde(deserialize_with = "de_string_list")]
    pub green_flag_chips: Vec<String>,
}

fn clamp_finite(value: f64, max: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

impl MetricsInput {
    /// Copy with non-finite scalars zeroed and all scalars clamped to range
    pub fn sanitized(&self) -> Self {
        Self {
            red_flags: clamp_finite(self.red_flags, RED_FLAGS_MAX),
            wasting_time: clamp_finite(self.wasting_time, PERCENT_MAX),
            actually_into_you: clamp_finite(self.actually_into_you, PERCENT_MAX),
            red_flag_chips: self.red_flag_chips.clone(),
            green_flag_chips: self.green_flag_chips.clone(),
        }
    }

    pub fn green_count(&self) -> usize {
        self.green_flag_chips.len()
    }
}
