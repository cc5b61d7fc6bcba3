//! Configuration loading and raw file structures

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGeminiConfig, FileGenerationConfig, FileLoggingConfig, FileNormalizeConfig,
    FileServerConfig,
};
pub use loader::ConfigLoader;
