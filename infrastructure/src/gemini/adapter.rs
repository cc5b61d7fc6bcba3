//! Gemini gateway adapter
//!
//! Implements [`GenerationGateway`] over the `generateContent` REST
//! endpoint. The API key is read from the process environment on every
//! call — its absence short-circuits the request before any network
//! traffic, as a distinct configuration failure.

use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use async_trait::async_trait;
use quandary_application::ports::generation_gateway::{GatewayError, GenerationGateway};
use quandary_domain::PromptRequest;
use tracing::debug;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Runtime settings for the Gemini adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub model: String,
    pub api_base: String,
    pub max_output_tokens: u32,
    pub temperature: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            max_output_tokens: 256,
            temperature: 1.0,
        }
    }
}

/// Gateway to the Gemini generation API.
pub struct GeminiGateway {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Read the API key from the environment, rejecting unset or blank
    /// values before any outbound call is made.
    fn read_api_key() -> Result<String, GatewayError> {
        Self::validate_key(std::env::var(API_KEY_ENV).ok())
    }

    fn validate_key(value: Option<String>) -> Result<String, GatewayError> {
        value
            .filter(|key| !key.trim().is_empty())
            .ok_or(GatewayError::MissingApiKey)
    }

    fn build_body(&self, request: &PromptRequest) -> GenerateContentRequest {
        let response_schema = request.response_schema().cloned();
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: request.instruction().to_string(),
                }],
                role: Some("user".to_string()),
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
                response_mime_type: response_schema
                    .is_some()
                    .then(|| "application/json".to_string()),
                response_schema,
            },
        }
    }

    /// Pull the first candidate's first text part out of the envelope.
    fn extract_text(envelope: GenerateContentResponse) -> Result<String, GatewayError> {
        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(GatewayError::EmptyResponse)
    }
}

#[async_trait]
impl GenerationGateway for GeminiGateway {
    async fn generate(&self, request: &PromptRequest) -> Result<String, GatewayError> {
        let api_key = Self::read_api_key()?;
        let body = self.build_body(request);

        debug!(model = %self.config.model, mode = %request.mode(), "calling generateContent");

        // Single attempt; the transport default is the only timeout
        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("X-goog-api-key", &api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        Self::extract_text(envelope)
    }
}
