//! Extraction tier bookkeeping

use crate::core::question_pair::QuestionPair;
use crate::generation::mode::GenerationMode;
use serde::Serialize;

/// Which extraction tier produced a pair.
///
/// Ordered from most to least structurally reliable. Carried alongside the
/// pair so callers can surface degradation — a shift toward the lower
/// tiers is a model-quality regression that must not stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionTier {
    /// The reply honored the response schema.
    Structured,
    /// The strict `A: ... OR B: ...` pattern matched.
    Pattern,
    /// Only the `A:` marker matched; split at an embedded `B:`.
    MarkerSplit,
    /// Only the `A:` marker matched; split at the `" or "` separator.
    OrSplit,
    /// Only the `A:` marker matched; second option is a fixed literal.
    SingleOption,
    /// Nothing recognizable; the fixed default pair was returned.
    Default,
}

impl ExtractionTier {
    /// Whether this tier is a degradation for the given mode.
    ///
    /// Structured mode expects `Structured`; free-text mode expects
    /// `Pattern`. Anything below the expected tier means the model did not
    /// honor the requested format.
    pub fn is_degraded(&self, mode: GenerationMode) -> bool {
        match mode {
            GenerationMode::Structured => !matches!(self, Self::Structured),
            GenerationMode::FreeText => !matches!(self, Self::Pattern),
        }
    }
}

impl std::fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Structured => "structured",
            Self::Pattern => "pattern",
            Self::MarkerSplit => "marker_split",
            Self::OrSplit => "or_split",
            Self::SingleOption => "single_option",
            Self::Default => "default",
        };
        write!(f, "{}", name)
    }
}

/// A normalized pair together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuestion {
    pub pair: QuestionPair,
    pub tier: ExtractionTier,
}
