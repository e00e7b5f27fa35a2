//! Provider-independent request and response types

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One `{role, content}` entry of the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub top_p: f32,
    pub stop: Option<Vec<String>>,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.9,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            top_p: 0.95,
            stop: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub options: SamplingOptions,
    /// Extra headers merged over the provider's own.
    pub headers: Option<Headers>,
}

impl GenerateRequest {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages,
            options: SamplingOptions::default(),
            headers: None,
        }
    }

    pub fn with_options(mut self, options: SamplingOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResponse {
    /// Content of the first choice, as returned by the service.
    pub content: String,
    pub model: Option<String>,
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
}

/// Ordered header map with string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: BTreeMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Copy every entry of `other` over this map.
    pub fn merge_with(&mut self, other: &Headers) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that are not valid HTTP header names or values are skipped.
    pub fn to_reqwest_headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in &self.entries {
            let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) else {
                tracing::warn!(header = %name, "skipping invalid header");
                continue;
            };
            map.insert(name, value);
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sampling_options() {
        let options = SamplingOptions::default();
        assert_eq!(options.max_tokens, 500);
        assert_eq!(options.temperature, 0.9);
        assert_eq!(options.top_p, 0.95);
        assert_eq!(options.frequency_penalty, 0.0);
        assert_eq!(options.presence_penalty, 0.0);
        assert!(options.stop.is_none());
    }

    #[test]
    fn test_message_serialization() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }

    #[test]
    fn test_only_chat_roles_deserialize() {
        let user: Message = serde_json::from_str(r#"{"role":"user","content":"q"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(serde_json::from_str::<Message>(r#"{"role":"system","content":"s"}"#).is_err());
    }

    #[test]
    fn test_headers_merge_overrides() {
        let mut headers: Headers = [("X-Channel", "BB-Android"), ("api-key", "")].into_iter().collect();
        let custom: Headers = [("X-Channel", "web")].into_iter().collect();
        headers.merge_with(&custom);
        assert_eq!(headers.get("x-channel"), Some("web"));
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn test_to_reqwest_headers_skips_invalid() {
        let headers: Headers = [("X-Caller", "listing-svc"), ("bad header", "x"), ("api-key", "")]
            .into_iter()
            .collect();
        let map = headers.to_reqwest_headers();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("x-caller").unwrap(), "listing-svc");
        assert_eq!(map.get("api-key").unwrap(), "");
    }
}
