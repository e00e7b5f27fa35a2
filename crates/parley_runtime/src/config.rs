//! Runtime configuration for parley

use std::path::PathBuf;
use std::str::FromStr;

use parley_constant::app::BRANDING_FILE;

use parley_llms::providers::azure::AzureConfig;
use parley_llms::providers::openai::OpenAiConfig;
use parley_llms::{AzureOpenAiProvider, CompletionClient, OpenAiProvider, SamplingOptions};

use crate::error::{Result, RuntimeError};

/// Completion backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LlmProvider {
    #[default]
    Azure,
    OpenAI,
}

impl LlmProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Azure => "azure",
            LlmProvider::OpenAI => "openai",
        }
    }
}

impl FromStr for LlmProvider {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "azure" | "azure-openai" => Ok(LlmProvider::Azure),
            "openai" => Ok(LlmProvider::OpenAI),
            other => Err(RuntimeError::ConfigError(format!(
                "unknown provider '{}' (expected azure or openai)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub provider: LlmProvider,
    /// Sent as `api-key` (Azure) or bearer token (OpenAI)
    pub api_key: String,
    pub azure_endpoint: String,
    pub azure_deployment: String,
    pub azure_api_version: String,
    pub openai_base_url: String,
    /// Model name for OpenAI-compatible endpoints; Azure picks it by deployment
    pub model: String,
    pub sampling: SamplingOptions,
    /// Color scheme name for the chat view: "dark" or "light"
    pub theme: String,
    /// Banner text file shown in the header
    pub branding: PathBuf,
}

pub const THEMES: &[&str] = &["dark", "light"];

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            api_key: String::new(),
            azure_endpoint: AzureConfig::DEFAULT_ENDPOINT.to_string(),
            azure_deployment: AzureConfig::DEFAULT_DEPLOYMENT.to_string(),
            azure_api_version: AzureConfig::DEFAULT_API_VERSION.to_string(),
            openai_base_url: OpenAiConfig::DEFAULT_BASE_URL.to_string(),
            model: OpenAiConfig::DEFAULT_MODEL.to_string(),
            sampling: SamplingOptions::default(),
            theme: THEMES[0].to_string(),
            branding: PathBuf::from(BRANDING_FILE),
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: LlmProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_azure_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.azure_endpoint = endpoint.into();
        self
    }

    pub fn with_azure_deployment(mut self, deployment: impl Into<String>) -> Self {
        self.azure_deployment = deployment.into();
        self
    }

    pub fn with_openai_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Result<Self> {
        let theme = theme.into().trim().to_lowercase();
        if !THEMES.contains(&theme.as_str()) {
            return Err(RuntimeError::ConfigError(format!(
                "unknown theme '{}' (expected {})",
                theme,
                THEMES.join(" or ")
            )));
        }
        self.theme = theme;
        Ok(self)
    }

    pub fn with_branding(mut self, path: impl Into<PathBuf>) -> Self {
        self.branding = path.into();
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::new();

        if let Some(provider) = var("PARLEY_PROVIDER") {
            config.provider = provider.parse()?;
        }
        if let Some(key) = var("PARLEY_API_KEY") {
            config.api_key = key;
        }
        if let Some(endpoint) = var("PARLEY_AZURE_ENDPOINT") {
            config.azure_endpoint = endpoint;
        }
        if let Some(deployment) = var("PARLEY_AZURE_DEPLOYMENT") {
            config.azure_deployment = deployment;
        }
        if let Some(version) = var("PARLEY_AZURE_API_VERSION") {
            config.azure_api_version = version;
        }
        if let Some(base_url) = var("PARLEY_OPENAI_BASE_URL") {
            config.openai_base_url = base_url;
        }
        if let Some(model) = var("PARLEY_MODEL") {
            config.model = model;
        }
        if let Some(theme) = var("PARLEY_THEME") {
            config = config.with_theme(theme)?;
        }
        if let Some(branding) = var("PARLEY_BRANDING") {
            config.branding = PathBuf::from(branding);
        }

        Ok(config)
    }

    /// Build the completion client for the selected provider.
    pub fn build_client(&self) -> Result<CompletionClient> {
        let client = match self.provider {
            LlmProvider::Azure => {
                let azure = AzureConfig::new(self.api_key.clone())
                    .with_endpoint(self.azure_endpoint.clone())
                    .with_deployment(self.azure_deployment.clone())
                    .with_api_version(self.azure_api_version.clone());
                CompletionClient::new(AzureOpenAiProvider::new(azure))
            }
            LlmProvider::OpenAI => {
                let openai = OpenAiConfig::new(self.api_key.clone())
                    .with_base_url(self.openai_base_url.clone())
                    .with_model(self.model.clone());
                CompletionClient::new(OpenAiProvider::new(openai)?)
            }
        };
        Ok(client.with_options(self.sampling.clone()))
    }

    /// Request URL for display.
    pub fn endpoint_url(&self) -> String {
        match self.provider {
            LlmProvider::Azure => AzureConfig::new("")
                .with_endpoint(self.azure_endpoint.clone())
                .with_deployment(self.azure_deployment.clone())
                .with_api_version(self.azure_api_version.clone())
                .completions_url(),
            LlmProvider::OpenAI => OpenAiConfig::new("")
                .with_base_url(self.openai_base_url.clone())
                .base_url
                + "chat/completions",
        }
    }
}
