//! Error types for completion requests

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing API key for provider: {0}")]
    MissingApiKey(String),

    #[error("provider error: {0}")]
    ProviderError(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Error::ProviderError(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Error::InvalidResponse(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display() {
        let err = Error::provider_error("Azure OpenAI API error 500: boom");
        assert_eq!(err.to_string(), "provider error: Azure OpenAI API error 500: boom");
    }

    #[test]
    fn test_invalid_response_display() {
        let err = Error::invalid_response("no choices in response");
        assert_eq!(err.to_string(), "invalid response: no choices in response");
    }

    #[test]
    fn test_missing_api_key_display() {
        let err = Error::MissingApiKey("openai".to_string());
        assert_eq!(err.to_string(), "missing API key for provider: openai");
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
