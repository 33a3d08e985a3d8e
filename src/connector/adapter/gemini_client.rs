use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::ModelGateway;
use crate::domain::{DomainError, ImageAnalysisRequest};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GENERATE_CONTENT_PATH: &str = "/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini `generateContent` request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text {
        text: &'a str,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Minimal subset of the `generateContent` response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Error body shape returned by the Gemini API on non-2xx responses.
#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

/// HTTP client for the Gemini `generateContent` API.
///
/// Implements [`ModelGateway`] so the use cases stay decoupled from
/// transport and serialization details. Text-only and text+image calls
/// share one wire format; images travel base64-encoded as `inlineData`
/// parts.
///
/// Configuration comes from the environment, never from literals:
///
/// | Variable          | Default                                      | Purpose            |
/// |-------------------|----------------------------------------------|--------------------|
/// | `GOOGLE_API_KEY`  | (required)                                   | API credential     |
/// | `GEMINI_MODEL`    | `gemini-1.5-pro`                             | Model name         |
/// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com`  | Endpoint override  |
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!(
            "{}{}/{}:generateContent",
            base.trim_end_matches('/'),
            GENERATE_CONTENT_PATH,
            model
        );
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model,
            url,
        }
    }

    /// Override the model after construction, rebuilding the endpoint
    /// URL to match.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model: String = model.into();
        let base = self
            .url
            .split(GENERATE_CONTENT_PATH)
            .next()
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        self.url = format!("{base}{GENERATE_CONTENT_PATH}/{model}:generateContent");
        self.model = model;
        self
    }

    /// Construct from environment variables.
    ///
    /// A missing `GOOGLE_API_KEY` is a fatal configuration error,
    /// surfaced once at startup — no gateway call is ever attempted
    /// without a credential.
    pub fn from_env() -> Result<Self, DomainError> {
        let key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
            DomainError::configuration(
                "GOOGLE_API_KEY is not set; export it before starting mediassist",
            )
        })?;
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(key, model, base))
    }

    async fn send(&self, request: ApiRequest<'_>) -> Result<String, DomainError> {
        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::gateway(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::gateway(Self::describe_http_error(
                status.as_u16(),
                &body,
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::gateway(format!("failed to parse response: {e}")))?;

        Self::extract_text(api_response)
    }

    /// Pull the first candidate's text out of a response.
    fn extract_text(response: ApiResponse) -> Result<String, DomainError> {
        response
            .candidates
            .and_then(|mut candidates| {
                if candidates.is_empty() {
                    None
                } else {
                    candidates.swap_remove(0).content
                }
            })
            .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
            .ok_or_else(|| DomainError::gateway("response contained no generated text"))
    }

    /// Turn a non-2xx status and body into a readable cause.
    ///
    /// Gemini error bodies carry `{"error": {"message", "status"}}`;
    /// fall back to the bare status code when the body has some other
    /// shape.
    fn describe_http_error(status: u16, body: &str) -> String {
        match serde_json::from_str::<ErrorWrapper>(body) {
            Ok(wrapper) => {
                let message = wrapper
                    .error
                    .message
                    .unwrap_or_else(|| format!("API returned HTTP {status}"));
                match wrapper.error.status {
                    Some(s) if !s.is_empty() => format!("{s}: {message}"),
                    _ => message,
                }
            }
            Err(_) => format!("API returned HTTP {status}"),
        }
    }
}

#[async_trait]
impl ModelGateway for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError> {
        debug!("GeminiClient: text request to {}", self.model);
        let request = ApiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part::Text { text: prompt }],
            }],
        };
        self.send(request).await
    }

    async fn generate_from_image(
        &self,
        prompt: &str,
        image: &ImageAnalysisRequest,
    ) -> Result<String, DomainError> {
        debug!(
            "GeminiClient: image request to {} ({} bytes)",
            self.model,
            image.data().len()
        );
        let request = ApiRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::Text { text: prompt },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.format().mime_type().to_string(),
                            data: BASE64_STANDARD.encode(image.data()),
                        },
                    },
                ],
            }],
        };
        self.send(request).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
