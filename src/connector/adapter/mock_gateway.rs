use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ModelGateway;
use crate::domain::{DomainError, ImageAnalysisRequest};

const MOCK_MODEL_NAME: &str = "mock-gateway";

/// A scripted [`ModelGateway`] for tests and offline `--mock` runs.
///
/// Either returns a fixed reply for every call or fails every call
/// with a fixed cause. Prompts are recorded so tests can assert on
/// what the orchestrator actually sent.
pub struct MockGateway {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGateway {
    /// A gateway that answers every call with `reply`.
    pub fn returning(reply: impl Into<String>) -> Self {
        Self {
            reply: Ok(reply.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A gateway whose every call fails with the given cause.
    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            reply: Err(cause.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompt log poisoned").clone()
    }

    fn record(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts
            .lock()
            .expect("prompt log poisoned")
            .push(prompt.to_string());

        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(cause) => Err(DomainError::gateway(cause.clone())),
        }
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError> {
        debug!("MockGateway: text call");
        self.record(prompt)
    }

    async fn generate_from_image(
        &self,
        prompt: &str,
        _request: &ImageAnalysisRequest,
    ) -> Result<String, DomainError> {
        debug!("MockGateway: image call");
        self.record(prompt)
    }

    fn model_name(&self) -> &str {
        MOCK_MODEL_NAME
    }
}
