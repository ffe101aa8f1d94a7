//! Replay analysis gateway
//!
//! The external analysis call is not part of this workspace. The
//! [`ReplayAnalysisGateway`] stands in for it by reading a previously
//! recorded analysis result from disk, which is enough to drive the whole
//! pipeline end to end.
//!
//! # Example
//!
//! ```ignore
//! use chatlens_infrastructure::ReplayAnalysisGateway;
//! use chatlens_application::{ReadingConfig, RunReadingUseCase};
//! use std::sync::Arc;
//!
//! let gateway = Arc::new(ReplayAnalysisGateway::new("recorded.json"));
//! let use_case = RunReadingUseCase::new(gateway, ReadingConfig::default());
//! ```

use async_trait::async_trait;
use chatlens_application::{AnalysisGateway, GatewayError};
use chatlens_domain::AnalysisRequest;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Gateway that answers every request with a recorded payload file.
///
/// The file is read on every call, so it can be edited between runs.
#[derive(Debug, Clone)]
pub struct ReplayAnalysisGateway {
    path: PathBuf,
}

impl ReplayAnalysisGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the recorded payload
    pub async fn load(&self) -> Result<Value, GatewayError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            GatewayError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            GatewayError::InvalidResponse(format!("{}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl AnalysisGateway for ReplayAnalysisGateway {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, GatewayError> {
        debug!(
            "Replaying analysis from {} (hints: {})",
            self.path.display(),
            request.hints()
        );
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlens_domain::{
        AnalysisPayload, ConversationText, FormatClassification, SpeakerAssignment,
    };
    use std::fs;
    use tempfile::tempdir;

    fn request() -> AnalysisRequest {
        AnalysisRequest::new(
            ConversationText::new("Me: hi\nJordan: hey"),
            FormatClassification::Conversation,
            vec![],
            SpeakerAssignment::new("Me", "Jordan"),
        )
    }

    #[tokio::test]
    async fn test_replays_recorded_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        fs::write(
            &path,
            r#"{"redFlags": 7, "evidence": [{"quote": "maybe later"}], "valence": "red"}"#,
        )
        .unwrap();

        let gateway = ReplayAnalysisGateway::new(&path);
        let value = gateway.analyze(&request()).await.unwrap();
        let payload = AnalysisPayload::from_value(&value);

        assert_eq!(payload.metrics.red_flags, 7.0);
        assert_eq!(payload.evidence.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempdir().unwrap();
        let gateway = ReplayAnalysisGateway::new(dir.path().join("nope.json"));
        let err = gateway.analyze(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_file_is_invalid_response() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        fs::write(&path, "{not json").unwrap();

        let err = ReplayAnalysisGateway::new(&path).load().await.unwrap_err();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
