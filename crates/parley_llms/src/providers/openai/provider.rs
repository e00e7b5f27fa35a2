//! OpenAI-compatible provider implementation

use async_trait::async_trait;
use reqwest::Client;

use super::types::OpenAiConfig;
use crate::error::{Error, Result};
use crate::provider::Provider;
use crate::providers::chat_completions::{post_chat_completion, ChatCompletionRequest};
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// OpenAI-compatible provider
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    /// Environment variable for the bearer token
    pub const API_KEY_ENV: &'static str = "PARLEY_API_KEY";

    pub fn new(config: OpenAiConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("openai".to_string()));
        }

        Ok(Self {
            config,
            client: Client::new(),
        })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn provider_id(&self) -> &str {
        "openai"
    }

    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Authorization", format!("Bearer {}", self.config.api_key));
        headers.insert("Content-Type", "application/json");

        if let Some(custom) = custom_headers {
            headers.merge_with(custom);
        }

        headers
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}chat/completions", self.config.base_url);
        let headers = self.build_headers(request.headers.as_ref());
        let body = ChatCompletionRequest::new(&request, Some(self.config.model.as_str()));

        post_chat_completion(&self.client, &url, &headers, &body, "OpenAI").await
    }
}
