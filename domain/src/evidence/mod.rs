//! Evidence prioritization
//!
//! Each quoted message from the analysis gets a severity badge by keyword
//! voting across four categories:
//!
//! ```text
//! quote + annotations ──lowercase──▶ distinct keyword hits per category
//!                                        │
//!                  ┌─────────────────────┴─────────────────────┐
//!             any hits?                                    no hits
//!                  │                                           │
//!      highest score wins                        position decides:
//!      (ties: SmokingGun > RedFlag               #0 SmokingGun
//!             > GreenFlag > Pattern)             #1 GreenFlag if valence green, else RedFlag
//!                                                #2+ Pattern
//! ```

pub mod category;
pub mod item;
pub mod prioritize;

pub use category::{Category, PriorityClassification, Valence};
pub use item::EvidenceItem;
pub use prioritize::{CategoryScores, positional_fallback, prioritize, prioritize_with};
