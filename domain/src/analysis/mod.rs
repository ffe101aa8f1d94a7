//! Analysis boundary types
//!
//! The shapes exchanged with the external analysis call: the request
//! context built from raw text, the loosely-typed payload that comes back,
//! and the reading produced from it.

pub mod payload;
pub mod reading;
pub mod request;

pub use payload::AnalysisPayload;
pub use reading::{RankedEvidence, Reading};
pub use request::AnalysisRequest;
