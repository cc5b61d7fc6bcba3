//! Category value object

use serde::{Deserialize, Serialize};

/// Fallback topic when the caller supplies none.
const DEFAULT_CATEGORY: &str = "General";

/// The topic a question should be about (Value Object)
///
/// Categories are opaque caller-supplied labels ("Food", "Tech", ...).
/// They are never validated against a fixed list — the enumerated picker
/// is a client concern. An absent, empty, or whitespace-only label falls
/// back to `"General"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a category, falling back to the default when the label is
    /// empty or whitespace-only.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        if label.trim().is_empty() {
            Self::default()
        } else {
            Self(label)
        }
    }

    /// Create from an optional label, e.g. a request-body field.
    pub fn from_optional(label: Option<String>) -> Self {
        match label {
            Some(l) => Self::new(l),
            None => Self::default(),
        }
    }

    /// Get the category label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(DEFAULT_CATEGORY.to_string())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let c = Category::new("Food");
        assert_eq!(c.as_str(), "Food");
    }

    #[test]
    fn test_empty_falls_back_to_default() {
        assert_eq!(Category::new("").as_str(), "General");
        assert_eq!(Category::new("   ").as_str(), "General");
    }

    #[test]
    fn test_from_optional() {
        assert_eq!(Category::from_optional(None).as_str(), "General");
        assert_eq!(
            Category::from_optional(Some("Tech".to_string())).as_str(),
            "Tech"
        );
        assert_eq!(Category::from_optional(Some(String::new())).as_str(), "General");
    }

    #[test]
    fn test_arbitrary_label_accepted_verbatim() {
        // No validation against an enumerated set
        let c = Category::new("definitely-not-a-picker-entry");
        assert_eq!(c.as_str(), "definitely-not-a-picker-entry");
    }
}
