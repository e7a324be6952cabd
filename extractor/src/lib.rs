pub mod completion;
pub mod extraction_service;
pub mod gemini_service;
pub mod models;
pub mod pdf_text;
pub mod prompt;

pub use completion::{CompletionError, TextCompletion};
pub use extraction_service::{ExtractionError, ExtractionService};
pub use gemini_service::GeminiService;
pub use models::*;
pub use pdf_text::extract_pdf_text;
pub use prompt::build_extraction_prompt;
