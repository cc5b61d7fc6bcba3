//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section is optional; missing sections fall back to defaults.
//!
//! # Example
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8787"
//!
//! [gemini]
//! model = "gemini-2.0-flash"
//! max_output_tokens = 256
//! temperature = 1.0
//!
//! [generation]
//! mode = "structured"            # or "free_text"
//!
//! [normalize]
//! or_split_case_insensitive = false
//!
//! [logging]
//! generation_log_path = "quandary-generations.jsonl"
//! ```

use crate::gemini::GeminiConfig;
use quandary_domain::{DomainError, GenerationMode, OrSplitPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// Generation mode selection
    pub generation: FileGenerationConfig,
    /// Normalizer policy settings
    pub normalize: FileNormalizeConfig,
    /// Diagnostics log settings
    pub logging: FileLoggingConfig,
}

/// `[server]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the server binds to
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".to_string(),
        }
    }
}

/// `[gemini]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier, e.g. "gemini-2.0-flash"
    pub model: String,
    /// API base URL (overridable for tests/proxies)
    pub api_base: String,
    /// Generation token cap
    pub max_output_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let defaults = GeminiConfig::default();
        Self {
            model: defaults.model,
            api_base: defaults.api_base,
            max_output_tokens: defaults.max_output_tokens,
            temperature: defaults.temperature,
        }
    }
}

impl FileGeminiConfig {
    pub fn to_gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            model: self.model.clone(),
            api_base: self.api_base.clone(),
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        }
    }
}

/// `[generation]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// "structured" (default) or "free_text"
    pub mode: String,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::Structured.to_string(),
        }
    }
}

impl FileGenerationConfig {
    pub fn parse_mode(&self) -> Result<GenerationMode, DomainError> {
        self.mode.parse()
    }
}

/// `[normalize]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNormalizeConfig {
    /// Fold ASCII case when searching for the degraded " or " separator
    pub or_split_case_insensitive: bool,
}

impl FileNormalizeConfig {
    pub fn to_policy(&self) -> OrSplitPolicy {
        OrSplitPolicy {
            case_insensitive: self.or_split_case_insensitive,
        }
    }
}

/// `[logging]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Where to write the JSONL generation log; absent disables it
    pub generation_log_path: Option<PathBuf>,
}
