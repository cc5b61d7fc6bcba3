//! Infrastructure layer for quandary
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGeminiConfig, FileGenerationConfig, FileLoggingConfig,
    FileNormalizeConfig, FileServerConfig,
};
pub use gemini::{GeminiConfig, GeminiGateway};
pub use logging::JsonlGenerationLogger;
