//! Application layer for quandary
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    generation_gateway::{GatewayError, GenerationGateway},
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
};
pub use use_cases::generate_question::{
    GenerateQuestionError, GenerateQuestionInput, GenerateQuestionUseCase,
};
