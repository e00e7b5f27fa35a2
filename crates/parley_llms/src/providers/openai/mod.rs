//! OpenAI-compatible provider module
//!
//! Any endpoint that serves `POST {base_url}chat/completions` with bearer auth.

mod provider;
mod types;

pub use provider::OpenAiProvider;
pub use types::OpenAiConfig;
