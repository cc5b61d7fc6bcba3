//! Port for structured generation diagnostics.
//!
//! Defines the [`GenerationLogger`] trait for recording what each request
//! produced: the prompt that was built, the untrimmed raw model output,
//! and the extraction tier that turned it into a pair.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record (JSONL) that model-quality regressions can be
//! diagnosed from after the fact.

use serde_json::Value;

/// A structured generation event for logging.
pub struct GenerationEvent {
    /// Event type identifier (e.g., "prompt_built", "question_extracted").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl GenerationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging generation events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible —
/// diagnostics must never disrupt a request, so logging failures are
/// silently ignored.
pub trait GenerationLogger: Send + Sync {
    /// Record a generation event.
    fn log(&self, event: GenerationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoGenerationLogger;

impl GenerationLogger for NoGenerationLogger {
    fn log(&self, _event: GenerationEvent) {}
}
