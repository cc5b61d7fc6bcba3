//! Gemini generation adapter
//!
//! Implements the application's [`GenerationGateway`] port against the
//! Gemini `generateContent` REST API.
//!
//! [`GenerationGateway`]: quandary_application::ports::generation_gateway::GenerationGateway

mod adapter;
mod types;

pub use adapter::{API_KEY_ENV, GeminiConfig, GeminiGateway};
