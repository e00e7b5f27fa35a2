//! Azure OpenAI configuration

use crate::types::Headers;

/// Tenant and routing headers the deployment gateway expects on every call.
pub fn default_routing_headers() -> Headers {
    [
        ("bb-decoded-vid", "1234"),
        ("X-Channel", "BB-Android"),
        ("X-Tracker", "listingGptCall"),
        ("X-Entry-Context", "bb-b2c"),
        ("X-Entry-Context-Id", "100"),
        ("X-Caller", "listing-svc"),
        ("x-project", "mm-canary"),
        ("bb-decoded-mid", "32517608"),
    ]
    .into_iter()
    .collect()
}

/// Configuration for the Azure OpenAI provider
#[derive(Debug, Clone)]
pub struct AzureConfig {
    /// Resource endpoint, without a trailing slash
    pub endpoint: String,
    /// Deployment name
    pub deployment: String,
    pub api_version: String,
    /// Sent as the `api-key` header. May be empty when the gateway injects credentials.
    pub api_key: String,
    pub routing_headers: Headers,
}

impl AzureConfig {
    pub const DEFAULT_ENDPOINT: &'static str = "https://bbazuresc-openai.openai.azure.com";
    pub const DEFAULT_DEPLOYMENT: &'static str = "GPT3_5";
    pub const DEFAULT_API_VERSION: &'static str = "2023-09-15-preview";

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            deployment: Self::DEFAULT_DEPLOYMENT.to_string(),
            api_version: Self::DEFAULT_API_VERSION.to_string(),
            api_key: api_key.into(),
            routing_headers: default_routing_headers(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = deployment.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_routing_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.routing_headers.insert(name, value);
        self
    }

    pub fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, self.api_version
        )
    }
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(
            AzureConfig::default().completions_url(),
            "https://bbazuresc-openai.openai.azure.com/openai/deployments/GPT3_5/chat/completions?api-version=2023-09-15-preview"
        );
    }

    #[test]
    fn test_endpoint_trailing_slash_trimmed() {
        let config = AzureConfig::new("k")
            .with_endpoint("http://localhost:8080/")
            .with_deployment("gpt-4")
            .with_api_version("2024-02-01");
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/openai/deployments/gpt-4/chat/completions?api-version=2024-02-01"
        );
    }

    #[test]
    fn test_routing_headers() {
        let headers = default_routing_headers();
        assert_eq!(headers.len(), 8);
        assert_eq!(headers.get("X-Tracker"), Some("listingGptCall"));
        assert_eq!(headers.get("bb-decoded-mid"), Some("32517608"));
    }
}
