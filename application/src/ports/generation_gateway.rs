//! Generation gateway port
//!
//! Defines the interface for communicating with the external
//! text-generation service.

use async_trait::async_trait;
use quandary_domain::PromptRequest;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Generation API key is not configured")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Generation service returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Could not decode generation response: {0}")]
    InvalidResponse(String),

    #[error("Generation response contained no candidate text")]
    EmptyResponse,
}

impl GatewayError {
    /// Whether this is a server-configuration failure rather than an
    /// upstream call failure. Configuration failures are detected before
    /// any network traffic and are not retryable.
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::MissingApiKey)
    }
}

/// Gateway to the text-generation service
///
/// One call per request — implementations must not retry, back off, or
/// override the transport's default timeout. The returned string is the
/// raw model output: free text, or the serialized object produced under a
/// response schema.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    async fn generate(&self, request: &PromptRequest) -> Result<String, GatewayError>;
}
