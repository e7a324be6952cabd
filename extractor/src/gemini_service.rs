use async_trait::async_trait;
use reqwest::Client;

use crate::completion::{CompletionError, TextCompletion};
use crate::models::{GeminiContent, GeminiPart, GeminiRequest, GeminiResponse};

const GEMINI_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiService {
    client: Client,
    api_key: String,
}

impl GeminiService {
    /// The credential is injected by the caller; this type never reads the
    /// process environment itself.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            GEMINI_MODEL, self.api_key
        )
    }
}

#[async_trait]
impl TextCompletion for GeminiService {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(CompletionError::Api(error_text));
        }

        let gemini_response: GeminiResponse = response.json().await?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or(CompletionError::EmptyResponse)
    }
}
