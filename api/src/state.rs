use std::sync::Arc;

use estate_extractor::ExtractionService;

#[derive(Clone)]
pub struct AppState {
    pub extraction: Arc<ExtractionService>,
}
