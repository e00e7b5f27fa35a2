//! parley_llms: chat-completion client for Azure OpenAI deployments and
//! OpenAI-compatible endpoints.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  CompletionClient                    │
//! │   complete(history, new_message) -> String           │
//! │   (errors become a "⚠️ Error: ..." reply)            │
//! │                       │                              │
//! │                Arc<dyn Provider>                     │
//! │               ┌───────┴───────┐                      │
//! │               ▼               ▼                      │
//! │        ┌────────────┐  ┌────────────┐                │
//! │        │   Azure    │  │   OpenAI   │                │
//! │        │  OpenAI    │  │ compatible │                │
//! │        └────────────┘  └────────────┘                │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use parley_llms::{AzureOpenAiProvider, CompletionClient, Message};
//! use parley_llms::providers::azure::AzureConfig;
//!
//! # async fn demo() {
//! let client = CompletionClient::new(AzureOpenAiProvider::new(AzureConfig::default()));
//! let history = vec![Message::user("hi"), Message::assistant("hello!")];
//! let reply = client.complete(&history, "what is rust?").await;
//! println!("{reply}");
//! # }
//! ```

pub mod completion;
pub mod error;
pub mod provider;
pub mod providers;
pub mod types;


pub use completion::{warning_reply, CompletionClient, WARNING_MARKER};
pub use error::{Error, Result};
pub use provider::Provider;

pub use providers::{AzureOpenAiProvider, OpenAiProvider};

pub use types::{GenerateRequest, GenerateResponse, Headers, Message, Role, SamplingOptions, Usage};
