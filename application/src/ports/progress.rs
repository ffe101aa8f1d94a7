//! Progress notification port
//!
//! Defines the interface for reporting progress while a reading is produced.

use chatlens_domain::{AnalysisRequest, Reading};

/// Callback for progress updates during a reading
///
/// Implementations live in the presentation layer. Every hook has a no-op
/// default.
pub trait ReadingProgressNotifier: Send + Sync {
    /// Called once speaker and format detection are done
    fn on_request_prepared(&self, _request: &AnalysisRequest) {}

    /// Called before the gateway is invoked
    fn on_analysis_start(&self) {}

    /// Called when the gateway returned, successfully or not
    fn on_analysis_complete(&self, _success: bool) {}

    /// Called with the finished reading
    fn on_reading_ready(&self, _reading: &Reading) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReadingProgressNotifier for NoProgress {}
