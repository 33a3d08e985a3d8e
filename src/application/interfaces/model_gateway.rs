use async_trait::async_trait;

use crate::domain::{DomainError, ImageAnalysisRequest};

/// The generative-AI completion service behind the assistant.
///
/// Implementors encapsulate transport, authentication, and
/// vendor-specific API details. Consumers (the chat and image analysis
/// use cases) see only a prompt-in, text-out contract; every failure
/// surfaces as [`DomainError::Gateway`] with a human-readable cause.
///
/// Retry, rate limiting, and tokenization all belong to the provider.
/// This port specifies none of them: a call either returns the full
/// generated text or fails, terminally for that turn.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate text from a fully-assembled prompt.
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError>;

    /// Generate text from a prompt plus an inline image.
    async fn generate_from_image(
        &self,
        prompt: &str,
        request: &ImageAnalysisRequest,
    ) -> Result<String, DomainError>;

    /// Name of the backing model, for logging.
    fn model_name(&self) -> &str;
}
