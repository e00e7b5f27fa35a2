//! Azure OpenAI provider implementation

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;

use super::types::AzureConfig;
use crate::error::Result;
use crate::provider::Provider;
use crate::providers::chat_completions::{post_chat_completion, ChatCompletionRequest};
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// Azure OpenAI provider
pub struct AzureOpenAiProvider {
    config: AzureConfig,
    client: Client,
}

impl AzureOpenAiProvider {
    /// Environment variable for the `api-key` header
    pub const API_KEY_ENV: &'static str = "PARLEY_API_KEY";

    pub fn new(config: AzureConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &AzureConfig {
        &self.config
    }
}

/// UTC time in ISO-8601 with microseconds and a `Z` suffix.
fn request_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

#[async_trait]
impl Provider for AzureOpenAiProvider {
    fn provider_id(&self) -> &str {
        "azure"
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type", "application/json");
        headers.insert("api-key", self.config.api_key.clone());
        headers.merge_with(&self.config.routing_headers);
        headers.insert("X-Timestamp", request_timestamp());

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = self.config.completions_url();
        let headers = self.build_headers(request.headers.as_ref());
        let body = ChatCompletionRequest::new(&request, None);

        post_chat_completion(&self.client, &url, &headers, &body, "Azure OpenAI").await
    }
}
