use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::ModelGateway;
use crate::domain::{prompt_policy, DomainError, ImageAnalysisRequest};

/// Single-shot image analysis: build the prompt, call the gateway,
/// return the generated text.
///
/// The result is never persisted and no conversation session is
/// involved; analyzing the same image twice is two independent calls.
/// Gateway failures come back as the user-visible
/// `"An error occurred: <cause>"` string rather than an `Err`, matching
/// the chat path: the user always sees something, never a raw failure.
pub struct AnalyzeImageUseCase {
    gateway: Arc<dyn ModelGateway>,
}

impl AnalyzeImageUseCase {
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request: &ImageAnalysisRequest) -> Result<String, DomainError> {
        if request.data().is_empty() {
            return Err(DomainError::invalid_input("image data is empty"));
        }

        info!(
            "Analyzing {} image ({} bytes) with {}",
            request.format(),
            request.data().len(),
            self.gateway.model_name()
        );
        let start_time = Instant::now();

        let prompt = prompt_policy::build_image_prompt(request.user_text());
        let result = match self.gateway.generate_from_image(&prompt, request).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Gateway call failed: {e}");
                format!("An error occurred: {}", e.cause())
            }
        };

        info!(
            "Analysis completed in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockGateway;
    use crate::domain::ImageFormat;

    fn jpeg_request() -> ImageAnalysisRequest {
        ImageAnalysisRequest::new(vec![0xFF, 0xD8, 0xFF, 0xE0], ImageFormat::Jpeg)
    }

    #[tokio::test]
    async fn empty_image_is_invalid_input() {
        let use_case = AnalyzeImageUseCase::new(Arc::new(MockGateway::returning("unused")));
        let request = ImageAnalysisRequest::new(Vec::new(), ImageFormat::Png);

        let err = use_case.execute(&request).await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn gateway_receives_generic_prompt_without_user_text() {
        let gateway = Arc::new(MockGateway::returning("analysis"));
        let use_case = AnalyzeImageUseCase::new(gateway.clone());

        use_case.execute(&jpeg_request()).await.unwrap();

        let prompts = gateway.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Provide a medical analysis"));
    }

    #[tokio::test]
    async fn gateway_failure_becomes_the_result_text() {
        let gateway = Arc::new(MockGateway::failing("quota exceeded"));
        let use_case = AnalyzeImageUseCase::new(gateway);

        let result = use_case.execute(&jpeg_request()).await.unwrap();
        assert_eq!(result, "An error occurred: quota exceeded");
    }
}
