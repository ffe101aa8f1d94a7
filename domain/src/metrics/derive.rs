//! Metric derivation: four raw scalars in, three tiers out.

use super::input::{MetricsInput, PERCENT_MAX, RED_FLAGS_MAX};
use super::tier::{COMMUNICATION_TIERS, COMPATIBILITY_TIERS, Tier};
use crate::rules::MetricsRules;
use serde::{Deserialize, Serialize};

/// Each green flag cancels half a red flag
const GREEN_RED_OFFSET: f64 = 0.5;
const COMPAT_GREEN_WEIGHT: f64 = 3.0;
const COMPAT_RED_WEIGHT: f64 = 2.0;
/// Green flags counted towards communication, at most
const GREEN_EASE_CAP: usize = 5;
/// Wasted-time discount per counted green flag (5 flags = 10%)
const WASTE_DISCOUNT_PER_GREEN: f64 = 0.02;
const COMM_ISSUE_PENALTY: f64 = 20.0;
const COMM_GREEN_BONUS: f64 = 2.0;

/// The three presentation-ready scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub risk: Tier,
    pub compatibility: Tier,
    pub communication: Tier,
}

/// Clamp only. Tiers are picked from the unrounded value.
fn bounded(value: f64, max: f64) -> f64 {
    value.clamp(0.0, max)
}

/// Derive metrics with the built-in communication-issue keywords.
///
/// # Example
///
/// ```
/// use chatlens_domain::metrics::{derive_metrics, MetricsInput, TierLevel};
///
/// let metrics = derive_metrics(&MetricsInput {
///     red_flags: 2.0,
///     actually_into_you: 80.0,
///     ..Default::default()
/// });
/// assert_eq!(metrics.risk.level, TierLevel::Low);
/// assert_eq!(metrics.compatibility.score, 76.0);
/// ```
pub fn derive_metrics(input: &MetricsInput) -> DerivedMetrics {
    derive_metrics_with(input, &MetricsRules::default())
}

/// Derive metrics with the given rules. Total and pure.
pub fn derive_metrics_with(input: &MetricsInput, rules: &MetricsRules) -> DerivedMetrics {
    let input = input.sanitized();
    let green = input.green_count() as f64;
    let red = input.red_flags;

    let effective_red = bounded(red - GREEN_RED_OFFSET * green, RED_FLAGS_MAX);
    let risk = Tier::from_risk(effective_red);

    let compat_score = bounded(
        input.actually_into_you + COMPAT_GREEN_WEIGHT * green - COMPAT_RED_WEIGHT * red,
        PERCENT_MAX,
    );
    let compatibility = Tier::from_percentage(compat_score, COMPATIBILITY_TIERS);

    let has_comm_issues = rules.has_comm_issue(&input.red_flag_chips);
    let green_ease = input.green_count().min(GREEN_EASE_CAP) as f64;
    let effective_waste = input.wasting_time * (1.0 - WASTE_DISCOUNT_PER_GREEN * green_ease);
    let issue_penalty = if has_comm_issues { COMM_ISSUE_PENALTY } else { 0.0 };
    let comm_score = bounded(
        PERCENT_MAX - effective_waste - issue_penalty + COMM_GREEN_BONUS * green_ease,
        PERCENT_MAX,
    );
    let communication = Tier::from_percentage(comm_score, COMMUNICATION_TIERS);

    DerivedMetrics {
        risk,
        compatibility,
        communication,
    }
}
