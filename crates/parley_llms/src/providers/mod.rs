pub mod azure;
pub mod chat_completions;
pub mod openai;

pub use azure::AzureOpenAiProvider;
pub use openai::OpenAiProvider;
