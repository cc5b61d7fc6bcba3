//! Generate Question use case.
//!
//! Executes the full pipeline for one request: build the prompt, invoke
//! the generation gateway (single attempt), normalize whatever came back,
//! and surface which extraction tier was needed.
//!
//! Normalization never fails — once the gateway has answered, the caller
//! is guaranteed a populated pair. Only configuration and upstream-call
//! problems propagate as errors.

use crate::ports::generation_gateway::{GatewayError, GenerationGateway};
use crate::ports::generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger};
use quandary_domain::{
    Category, GenerationMode, OrSplitPolicy, PromptRequest, QuestionPair, normalize,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while generating a question.
#[derive(Error, Debug)]
pub enum GenerateQuestionError {
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl GenerateQuestionError {
    /// Whether the underlying failure is a server-configuration problem
    /// (missing credential) rather than an upstream call failure.
    pub fn is_configuration(&self) -> bool {
        match self {
            GenerateQuestionError::Gateway(e) => e.is_configuration(),
        }
    }
}

/// Input for the [`GenerateQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQuestionInput {
    /// The topic the question should be about.
    pub category: Category,
    /// Which prompt format and parsing path to use.
    pub mode: GenerationMode,
}

impl GenerateQuestionInput {
    pub fn new(category: Category, mode: GenerationMode) -> Self {
        Self { category, mode }
    }
}

/// Use case for generating one two-option question.
///
/// Runs the pipeline once per call:
/// 1. Build a [`PromptRequest`] for the category and mode
/// 2. Invoke the gateway — no retry, no backoff
/// 3. [`normalize`] the raw output through the extraction tiers
/// 4. Log the tier and the untrimmed raw text
pub struct GenerateQuestionUseCase {
    gateway: Arc<dyn GenerationGateway>,
    policy: OrSplitPolicy,
    logger: Arc<dyn GenerationLogger>,
}

impl GenerateQuestionUseCase {
    pub fn new(gateway: Arc<dyn GenerationGateway>) -> Self {
        Self {
            gateway,
            policy: OrSplitPolicy::default(),
            logger: Arc::new(NoGenerationLogger),
        }
    }

    /// Set the degraded-path split policy.
    pub fn with_policy(mut self, policy: OrSplitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set a structured diagnostics logger.
    pub fn with_logger(mut self, logger: Arc<dyn GenerationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the pipeline for one request.
    pub async fn execute(
        &self,
        input: GenerateQuestionInput,
    ) -> Result<QuestionPair, GenerateQuestionError> {
        let request = PromptRequest::build(&input.category, input.mode);
        debug!(category = %input.category, mode = %input.mode, "built generation prompt");
        self.logger.log(GenerationEvent::new(
            "prompt_built",
            json!({
                "category": input.category.as_str(),
                "mode": input.mode.to_string(),
            }),
        ));

        let raw = self.gateway.generate(&request).await?;

        let normalized = normalize(&raw, input.mode, &self.policy);
        if normalized.tier.is_degraded(input.mode) {
            // Degradation is not a failure, but it must never be silent
            warn!(
                tier = %normalized.tier,
                raw = %raw,
                "model output did not match the requested format; fallback tier engaged"
            );
        } else {
            debug!(tier = %normalized.tier, "extracted question pair");
        }
        self.logger.log(GenerationEvent::new(
            "question_extracted",
            json!({
                "category": input.category.as_str(),
                "mode": input.mode.to_string(),
                "tier": normalized.tier,
                "raw": raw,
            }),
        ));

        Ok(normalized.pair)
    }
}
