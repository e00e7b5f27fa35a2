//! Runtime error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid message: {0}")]
    Message(#[from] parley_core::CoreError),

    #[error("LLM error: {0}")]
    Llm(#[from] parley_llms::Error),

    #[error("UI event channel closed")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = RuntimeError::ConfigError("unknown provider 'x'".to_string());
        assert_eq!(err.to_string(), "Configuration error: unknown provider 'x'");
    }

    #[test]
    fn test_from_core_error() {
        let err = RuntimeError::from(parley_core::CoreError::EmptyMessage);
        assert_eq!(err.to_string(), "Invalid message: message needs content or code");
    }
}
