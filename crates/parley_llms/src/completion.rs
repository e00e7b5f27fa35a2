//! Fail-soft completion client

use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, info_span, warn, Instrument};

use crate::error::Result;
use crate::provider::Provider;
use crate::types::{GenerateRequest, Message, SamplingOptions};

/// Prefix of every reply produced from a failed request.
pub const WARNING_MARKER: &str = "⚠️";

/// The reply text shown in place of a completion when a request fails.
pub fn warning_reply(error: impl Display) -> String {
    format!("{WARNING_MARKER} Error: {error}")
}

/// Sends the conversation to a provider and returns the assistant's reply.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn Provider>,
    options: SamplingOptions,
}

impl CompletionClient {
    pub fn new<P: Provider + 'static>(provider: P) -> Self {
        Self::from_arc(Arc::new(provider))
    }

    pub fn from_arc(provider: Arc<dyn Provider>) -> Self {
        Self {
            provider,
            options: SamplingOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SamplingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn provider_id(&self) -> &str {
        self.provider.provider_id()
    }

    /// `history` in order, then `new_message` as the final user entry.
    pub fn build_request(&self, history: &[Message], new_message: &str) -> GenerateRequest {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.extend_from_slice(history);
        messages.push(Message::user(new_message));
        GenerateRequest::new(messages).with_options(self.options.clone())
    }

    /// Like [`complete`](Self::complete) but returns the error instead of a warning reply.
    pub async fn try_complete(&self, history: &[Message], new_message: &str) -> Result<String> {
        let request = self.build_request(history, new_message);
        let span = info_span!(
            "completion",
            provider = self.provider.provider_id(),
            messages = request.messages.len()
        );

        let response = self
            .provider
            .generate(request)
            .instrument(span.clone())
            .await?;
        span.in_scope(|| {
            debug!(
                model = response.model.as_deref().unwrap_or("-"),
                finish_reason = response.finish_reason.as_deref().unwrap_or("-"),
                "completion received"
            )
        });
        Ok(response.content.trim().to_string())
    }

    /// Never fails: any error comes back as a reply starting with [`WARNING_MARKER`].
    pub async fn complete(&self, history: &[Message], new_message: &str) -> String {
        match self.try_complete(history, new_message).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(provider = self.provider.provider_id(), error = %e, "completion failed");
                warning_reply(e)
            }
        }
    }
}
