//! Metric derivation
//!
//! Turns the raw scalars of an analysis payload into three tiered scores:
//!
//! | Metric | Formula | Tiers |
//! |--------|---------|-------|
//! | Risk | `clamp(red − 0.5·green, 0, 10)` | `≤3` LOW, `≤7` MEDIUM, else HIGH |
//! | Compatibility | `clamp(into + 3·green − 2·red, 0, 100)` | `≥70` STRONG, `≥40` MODERATE, else POOR |
//! | Communication | `clamp(100 − waste·(1 − 0.02·ease) − issues + 2·ease, 0, 100)` | `≥70` STRONG, `≥40` MIXED, else POOR |
//!
//! where `green` is the green-chip count, `red` the red-flag scalar,
//! `ease = min(green, 5)` and `issues` is 20 when a red chip mentions a
//! communication problem.

pub mod derive;
pub mod input;
pub mod tier;

pub use derive::{DerivedMetrics, derive_metrics, derive_metrics_with};
pub use input::MetricsInput;
pub use tier::{Tier, TierColor, TierLevel};
