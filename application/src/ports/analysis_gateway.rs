//! Analysis Gateway port
//!
//! Defines the interface for the external analysis call. The call itself
//! (prompting, transport, billing) lives outside this workspace; adapters
//! only have to turn an [`AnalysisRequest`] into some JSON.

use async_trait::async_trait;
use chatlens_domain::AnalysisRequest;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during analysis gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Analysis unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway to the external analysis
///
/// The returned value is untrusted; callers parse it leniently with
/// [`AnalysisPayload::from_value`](chatlens_domain::AnalysisPayload::from_value).
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Run the analysis for a prepared request
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, GatewayError>;
}
