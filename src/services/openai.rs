use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::services::TagExtractor;

/// Errors that can occur when extracting tags from the chat-completion provider
#[derive(Debug, Error)]
pub enum TagProviderError {
    #[error("tag provider API key is not configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// OpenAI-style chat-completion client used to resolve a trip description
/// into a list of travel-interest tags.
///
/// The prompt pins the reply format to a bare JSON array of strings; anything
/// else is rejected as an invalid response.
pub struct OpenAiClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
    client: Client,
}

impl OpenAiClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self::with_timeout(base_url, api_key, model, Duration::from_secs(30))
    }

    pub fn with_timeout(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            model,
            client,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn build_prompt(description: &str) -> String {
        format!(
            "Extract relevant travel interest tags from the following trip description. \
             Reply with a JSON array of short lowercase tags and nothing else.\n\"{}\"",
            description
        )
    }
}

#[async_trait]
impl TagExtractor for OpenAiClient {
    async fn extract_tags(&self, description: &str) -> Result<Vec<String>, TagProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TagProviderError::MissingApiKey)?;

        let url = format!(
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        );

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": Self::build_prompt(description) }],
            "max_tokens": 50,
            "temperature": 0.7,
        });

        tracing::debug!("Requesting tag extraction from: {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TagProviderError::ApiError(format!(
                "Tag extraction failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let content = json
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .ok_or_else(|| {
                TagProviderError::InvalidResponse("Missing assistant message content".into())
            })?;

        let tags: Vec<String> = serde_json::from_str(content.trim()).map_err(|e| {
            TagProviderError::InvalidResponse(format!("Reply is not a JSON tag array: {}", e))
        })?;

        tracing::debug!("Extracted {} tags from description", tags.len());

        Ok(tags)
    }
}
