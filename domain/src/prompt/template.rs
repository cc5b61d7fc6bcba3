//! Prompt templates for question generation

use crate::core::category::Category;

/// Templates for the two generation modes
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction for free-text mode.
    ///
    /// The format demanded here is the contract the strict extraction tier
    /// matches against: an `A:` marker, the literal `OR`, a `B:` marker.
    /// Light inline markup is allowed inside each option — the extractor
    /// keeps it verbatim.
    pub fn free_text(category: &Category) -> String {
        format!(
            r#"Generate a fun "would you rather" question about the topic: {}.

Respond with EXACTLY this format and nothing else:
A: <first option> OR B: <second option>

Rules:
- Start with the marker "A:" and separate the two options with the word "OR" followed by the marker "B:".
- You may use light markdown such as **bold** or *italics* inside an option's text.
- Do not add commentary before the "A:" marker or after the second option."#,
            category
        )
    }

    /// Instruction for structured mode.
    ///
    /// The JSON shape itself is enforced by the response schema
    /// ([`super::PromptRequest::question_pair_schema`]); the instruction
    /// only has to steer the content.
    pub fn structured(category: &Category) -> String {
        format!(
            r#"Generate a fun "would you rather" question about the topic: {}.

Both options should be balanced in appeal so the choice is genuinely hard.
Keep the options positive or neutral — nothing negative or sad."#,
            category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_interpolates_category() {
        let prompt = PromptTemplate::free_text(&Category::new("Food"));
        assert!(prompt.contains("Food"));
    }

    #[test]
    fn test_free_text_demands_delimiter_pattern() {
        let prompt = PromptTemplate::free_text(&Category::default());
        assert!(prompt.contains("A:"));
        assert!(prompt.contains("OR"));
        assert!(prompt.contains("B:"));
    }

    #[test]
    fn test_free_text_allows_markup() {
        let prompt = PromptTemplate::free_text(&Category::default());
        assert!(prompt.contains("markdown"));
    }

    #[test]
    fn test_structured_interpolates_category() {
        let prompt = PromptTemplate::structured(&Category::new("Tech"));
        assert!(prompt.contains("Tech"));
    }

    #[test]
    fn test_empty_category_renders_default() {
        let prompt = PromptTemplate::structured(&Category::new(""));
        assert!(prompt.contains("General"));
    }
}
