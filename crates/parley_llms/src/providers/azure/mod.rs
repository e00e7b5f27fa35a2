//! Azure OpenAI provider module
//!
//! Chat completions against a named deployment:
//! `{endpoint}/openai/deployments/{deployment}/chat/completions?api-version={version}`

mod provider;
mod types;

pub use provider::AzureOpenAiProvider;
pub use types::{default_routing_headers, AzureConfig};
