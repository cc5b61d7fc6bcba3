//! Question pair value object

use serde::Serialize;

/// A two-option forced-choice question (Value Object)
///
/// The result of every generation: two non-empty option strings. The
/// wire form uses the `optionA` / `optionB` field names clients expect.
///
/// Invariant: both options are always populated. Construction enforces
/// this, so a `QuestionPair` in hand is always presentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPair {
    #[serde(rename = "optionA")]
    option_a: String,
    #[serde(rename = "optionB")]
    option_b: String,
}

impl QuestionPair {
    /// Create a new question pair
    ///
    /// # Panics
    /// Panics if either option is empty or only whitespace
    pub fn new(option_a: impl Into<String>, option_b: impl Into<String>) -> Self {
        Self::try_new(option_a, option_b).expect("question pair options cannot be empty")
    }

    /// Try to create a question pair, returning None if either option is
    /// empty or whitespace-only.
    pub fn try_new(option_a: impl Into<String>, option_b: impl Into<String>) -> Option<Self> {
        let option_a = option_a.into();
        let option_b = option_b.into();
        if option_a.trim().is_empty() || option_b.trim().is_empty() {
            None
        } else {
            Some(Self { option_a, option_b })
        }
    }

    /// Get the first option
    pub fn option_a(&self) -> &str {
        &self.option_a
    }

    /// Get the second option
    pub fn option_b(&self) -> &str {
        &self.option_b
    }
}

impl std::fmt::Display for QuestionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} OR {}", self.option_a, self.option_b)
    }
}
