use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::completion::{CompletionError, TextCompletion};
use crate::prompt::build_extraction_prompt;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("the model did not return a parseable JSON object")]
    InvalidModelOutput(#[source] serde_json::Error),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Runs the fixed prompt plus the document text through the completion
/// client and parses whatever comes back. The parsed value is returned
/// verbatim; no key or shape checks are applied.
pub struct ExtractionService {
    completion: Arc<dyn TextCompletion>,
}

impl ExtractionService {
    pub fn new(completion: Arc<dyn TextCompletion>) -> Self {
        Self { completion }
    }

    pub async fn extract(&self, document_text: &str) -> Result<Value, ExtractionError> {
        let prompt = build_extraction_prompt(document_text);
        let raw = self.completion.complete(&prompt).await?;
        log::debug!("model returned {} characters", raw.chars().count());

        let cleaned = strip_code_fences(&raw);
        serde_json::from_str(&cleaned).map_err(ExtractionError::InvalidModelOutput)
    }
}

/// Global removal of the Markdown fence markers, not anchored to the
/// boundaries of the reply: a literal "```" inside a field value is
/// stripped as well.
pub fn strip_code_fences(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "")
}
