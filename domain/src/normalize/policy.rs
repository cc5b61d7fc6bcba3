//! Degraded-path split policy

use serde::{Deserialize, Serialize};

/// Policy for the degraded `" or "` split.
///
/// The separator is searched with its surrounding spaces, so word
/// boundaries are already enforced ("for others" never matches). Whether
/// the search also folds case (`" OR "`, `" Or "`) is genuinely ambiguous
/// in the informal source pattern, so it is configuration rather than a
/// hard-coded guess. The default is a case-sensitive byte search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrSplitPolicy {
    /// Fold ASCII case when searching for the separator.
    pub case_insensitive: bool,
}

impl OrSplitPolicy {
    pub fn case_insensitive() -> Self {
        Self { case_insensitive: true }
    }
}
