//! Generation request construction

use super::template::PromptTemplate;
use crate::core::category::Category;
use crate::generation::mode::GenerationMode;
use serde_json::{Value, json};

/// Everything the invoker needs to call the generation service.
///
/// Built purely from a category and a mode; any category string, including
/// the default, is interpolated into the instruction verbatim. In
/// structured mode the request carries the response schema the service
/// should constrain its output to.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    category: Category,
    mode: GenerationMode,
    instruction: String,
    response_schema: Option<Value>,
}

impl PromptRequest {
    /// Build a request for the given category and mode.
    pub fn build(category: &Category, mode: GenerationMode) -> Self {
        let instruction = match mode {
            GenerationMode::FreeText => PromptTemplate::free_text(category),
            GenerationMode::Structured => PromptTemplate::structured(category),
        };
        let response_schema = match mode {
            GenerationMode::FreeText => None,
            GenerationMode::Structured => Some(Self::question_pair_schema()),
        };
        Self {
            category: category.clone(),
            mode,
            instruction,
            response_schema,
        }
    }

    /// The response schema for structured mode: an object with two string
    /// properties, `optionA` declared before `optionB`.
    pub fn question_pair_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "optionA": { "type": "STRING" },
                "optionB": { "type": "STRING" },
            },
            "required": ["optionA", "optionB"],
            "propertyOrdering": ["optionA", "optionB"],
        })
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// The rendered instruction text for the model.
    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    /// The response schema, present only in structured mode.
    pub fn response_schema(&self) -> Option<&Value> {
        self.response_schema.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_request_has_no_schema() {
        let request = PromptRequest::build(&Category::new("Food"), GenerationMode::FreeText);
        assert!(request.response_schema().is_none());
        assert!(request.instruction().contains("Food"));
    }

    #[test]
    fn test_structured_request_carries_schema() {
        let request = PromptRequest::build(&Category::default(), GenerationMode::Structured);
        let schema = request.response_schema().expect("structured mode declares a schema");
        assert_eq!(schema["required"], json!(["optionA", "optionB"]));
        assert_eq!(schema["propertyOrdering"][0], "optionA");
        assert_eq!(schema["propertyOrdering"][1], "optionB");
    }

    #[test]
    fn test_schema_declares_two_string_properties() {
        let schema = PromptRequest::question_pair_schema();
        assert_eq!(schema["properties"]["optionA"]["type"], "STRING");
        assert_eq!(schema["properties"]["optionB"]["type"], "STRING");
    }
}
