//! Generation mode selection

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the model is asked to format its reply.
///
/// The mode chosen at prompt time also selects the parsing path for the
/// reply: `Structured` enables the JSON-first extraction tier, `FreeText`
/// goes straight to pattern matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Ask for a plain-text `A: ... OR B: ...` line.
    FreeText,
    /// Ask for a JSON object constrained by a two-field response schema.
    Structured,
}

impl FromStr for GenerationMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free_text" | "free-text" | "text" => Ok(Self::FreeText),
            "structured" | "schema" => Ok(Self::Structured),
            other => Err(DomainError::InvalidMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FreeText => write!(f, "free_text"),
            Self::Structured => write!(f, "structured"),
        }
    }
}
