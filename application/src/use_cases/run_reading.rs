//! Run Reading use case.
//!
//! The full pipeline: prepare the request, call the analysis gateway, and
//! interpret whatever comes back.
//!
//! ```text
//! text ──▶ PrepareAnalysis ──▶ AnalysisGateway ──▶ AnalysisPayload ──▶ InterpretAnalysis ──▶ Reading
//!              │
//!              └── unresolved speakers on dialogue ──▶ SpeakersUnresolved
//! ```

use crate::config::ReadingConfig;
use crate::ports::analysis_gateway::{AnalysisGateway, GatewayError};
use crate::ports::progress::ReadingProgressNotifier;
use crate::use_cases::interpret_analysis::{InterpretAnalysisInput, InterpretAnalysisUseCase};
use crate::use_cases::prepare_analysis::{PrepareAnalysisInput, PrepareAnalysisUseCase};
use chatlens_domain::{AnalysisPayload, AnalysisRequest, Reading, RoleResolution};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur during a reading.
#[derive(Error, Debug)]
pub enum RunReadingError {
    #[error("Could not tell which speaker you are (candidates: {}); pass your name explicitly", .candidates.join(", "))]
    SpeakersUnresolved { candidates: Vec<String> },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Input for the [`RunReadingUseCase`].
#[derive(Debug, Clone)]
pub struct RunReadingInput {
    pub prepare: PrepareAnalysisInput,
    /// Overrides the configured visibility limit when set.
    pub visible_limit: Option<usize>,
}

impl RunReadingInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            prepare: PrepareAnalysisInput::new(text),
            visible_limit: None,
        }
    }

    pub fn with_self_hint(mut self, hint: Option<String>) -> Self {
        self.prepare.self_hint = hint;
        self
    }

    pub fn with_visible_limit(mut self, limit: Option<usize>) -> Self {
        self.visible_limit = limit;
        self
    }
}

/// Use case for producing a reading from raw text.
#[derive(Clone)]
pub struct RunReadingUseCase {
    gateway: Arc<dyn AnalysisGateway>,
    config: ReadingConfig,
    prepare: PrepareAnalysisUseCase,
    interpret: InterpretAnalysisUseCase,
}

impl RunReadingUseCase {
    pub fn new(gateway: Arc<dyn AnalysisGateway>, config: ReadingConfig) -> Self {
        Self {
            gateway,
            prepare: PrepareAnalysisUseCase::new(config.clone()),
            interpret: InterpretAnalysisUseCase::new(config.clone()),
            config,
        }
    }

    /// Execute the pipeline with progress callbacks.
    pub async fn execute(
        &self,
        input: RunReadingInput,
        progress: &dyn ReadingProgressNotifier,
    ) -> Result<Reading, RunReadingError> {
        let prepared = self.prepare.execute(input.prepare);
        if prepared.needs_self_choice()
            && let RoleResolution::Unresolved { candidates } = prepared.resolution
        {
            return Err(RunReadingError::SpeakersUnresolved { candidates });
        }
        let request = prepared.request;
        progress.on_request_prepared(&request);

        progress.on_analysis_start();
        let result = self.call_gateway(&request).await;
        progress.on_analysis_complete(result.is_ok());
        let raw = result?;

        let payload = AnalysisPayload::from_value(&raw);
        let reading = self.interpret.execute(
            InterpretAnalysisInput::for_request(payload, &request)
                .with_visible_limit(input.visible_limit),
        );
        progress.on_reading_ready(&reading);
        Ok(reading)
    }

    async fn call_gateway(&self, request: &AnalysisRequest) -> Result<Value, GatewayError> {
        info!(
            "Requesting analysis ({} format, {} vs {})",
            request.format, request.speakers.self_name, request.speakers.other_name
        );
        match self.config.gateway_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.gateway.analyze(request)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Analysis timed out after {:?}", limit);
                    Err(GatewayError::Timeout)
                }
            },
            None => self.gateway.analyze(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chatlens_domain::{FormatClassification, SpeakerAssignment, TierLevel};
    use serde_json::json;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Gateway that returns a fixed payload and records the requests it saw
    struct CannedGateway {
        response: Value,
        seen: Mutex<Vec<AnalysisRequest>>,
    }

    impl CannedGateway {
        fn new(response: Value) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AnalysisGateway for CannedGateway {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, GatewayError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    struct FailingGateway;

    #[async_trait]
    impl AnalysisGateway for FailingGateway {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<Value, GatewayError> {
            Err(GatewayError::Unavailable("offline".to_string()))
        }
    }

    struct SlowGateway;

    #[async_trait]
    impl AnalysisGateway for SlowGateway {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<Value, GatewayError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(json!({}))
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ReadingProgressNotifier for RecordingProgress {
        fn on_request_prepared(&self, request: &AnalysisRequest) {
            self.events
                .lock()
                .unwrap()
                .push(format!("prepared:{}", request.format));
        }

        fn on_analysis_complete(&self, success: bool) {
            self.events.lock().unwrap().push(format!("analysis:{}", success));
        }

        fn on_reading_ready(&self, reading: &Reading) {
            self.events
                .lock()
                .unwrap()
                .push(format!("ready:{}", reading.evidence.len()));
        }
    }

    const DIALOGUE: &str = "Me: you free friday?\nJordan: maybe, kinda busy\nMe: ok";

    #[tokio::test]
    async fn test_full_pipeline() {
        let gateway = Arc::new(CannedGateway::new(json!({
            "metrics": {"redFlags": 4, "wastingTime": 30, "actuallyIntoYou": 50},
            "evidence": [{"quote": "maybe, kinda busy"}],
            "valence": "red"
        })));
        let use_case = RunReadingUseCase::new(gateway.clone(), ReadingConfig::default());
        let progress = RecordingProgress::default();

        let reading = use_case
            .execute(RunReadingInput::new(DIALOGUE), &progress)
            .await
            .unwrap();

        assert_eq!(reading.format, FormatClassification::Conversation);
        assert_eq!(reading.speakers, SpeakerAssignment::new("Me", "Jordan"));
        assert_eq!(reading.metrics.risk.level, TierLevel::Medium);
        assert_eq!(reading.evidence.len(), 1);

        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].speakers.other_name, "Jordan");

        let events = progress.events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["prepared:conversation", "analysis:true", "ready:1"]
        );
    }

    #[tokio::test]
    async fn test_unresolved_speakers_error() {
        let gateway = Arc::new(CannedGateway::new(json!({})));
        let use_case = RunReadingUseCase::new(gateway.clone(), ReadingConfig::default());

        let err = use_case
            .execute(
                RunReadingInput::new("Alex: hey\nJordan: hi\nAlex: dinner?"),
                &crate::ports::progress::NoProgress,
            )
            .await
            .unwrap_err();

        match err {
            RunReadingError::SpeakersUnresolved { candidates } => {
                assert_eq!(candidates, vec!["Alex", "Jordan"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(gateway.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_self_hint_resolves_speakers() {
        let gateway = Arc::new(CannedGateway::new(json!({})));
        let use_case = RunReadingUseCase::new(gateway, ReadingConfig::default());

        let reading = use_case
            .execute(
                RunReadingInput::new("Alex: hey\nJordan: hi\nAlex: dinner?")
                    .with_self_hint(Some("Jordan".to_string())),
                &crate::ports::progress::NoProgress,
            )
            .await
            .unwrap();
        assert_eq!(reading.speakers, SpeakerAssignment::new("Jordan", "Alex"));
    }

    #[tokio::test]
    async fn test_gateway_failure_is_reported() {
        let use_case = RunReadingUseCase::new(Arc::new(FailingGateway), ReadingConfig::default());
        let progress = RecordingProgress::default();

        let err = use_case
            .execute(RunReadingInput::new(DIALOGUE), &progress)
            .await
            .unwrap_err();
        assert!(matches!(err, RunReadingError::Gateway(GatewayError::Unavailable(_))));
        assert!(
            progress
                .events
                .lock()
                .unwrap()
                .contains(&"analysis:false".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_gateway_timeout() {
        let config = ReadingConfig::default().with_gateway_timeout_seconds(Some(1));
        let use_case = RunReadingUseCase::new(Arc::new(SlowGateway), config);

        let err = use_case
            .execute(RunReadingInput::new(DIALOGUE), &crate::ports::progress::NoProgress)
            .await
            .unwrap_err();
        assert!(matches!(err, RunReadingError::Gateway(GatewayError::Timeout)));
    }

    #[tokio::test]
    async fn test_garbage_payload_still_reads() {
        let gateway = Arc::new(CannedGateway::new(json!("not an object")));
        let use_case = RunReadingUseCase::new(gateway, ReadingConfig::default());

        let reading = use_case
            .execute(RunReadingInput::new(DIALOGUE), &crate::ports::progress::NoProgress)
            .await
            .unwrap();
        assert_eq!(reading.metrics.risk.level, TierLevel::Low);
        assert!(reading.evidence.is_empty());
    }
}
