use async_trait::async_trait;

use crate::error::Result;
use crate::types::{GenerateRequest, GenerateResponse, Headers};

/// A chat-completion backend.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short identifier, e.g. "azure".
    fn provider_id(&self) -> &str;

    /// Headers for one request, with `custom_headers` merged last.
    fn build_headers(&self, custom_headers: Option<&Headers>) -> Headers;

    /// Send one non-streaming completion request.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse>;
}
