//! Wire format shared by Azure OpenAI and OpenAI-compatible chat/completions endpoints

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{GenerateRequest, GenerateResponse, Headers, Message, Usage};

/// Request body. `stop` is always sent, as `null` when unset.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<&'a str>,
    pub messages: &'a [Message],
    pub max_tokens: u32,
    pub temperature: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub top_p: f32,
    pub stop: Option<&'a [String]>,
}

impl<'a> ChatCompletionRequest<'a> {
    pub fn new(request: &'a GenerateRequest, model: Option<&'a str>) -> Self {
        let options = &request.options;
        Self {
            model,
            messages: &request.messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
            frequency_penalty: options.frequency_penalty,
            presence_penalty: options.presence_penalty,
            top_p: options.top_p,
            stop: options.stop.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Take the first choice's content.
pub fn from_chat_response(resp: ChatCompletionResponse) -> Result<GenerateResponse> {
    let choice = resp
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("no choices in response"))?;

    let content = choice
        .message
        .content
        .ok_or_else(|| Error::invalid_response("first choice has no content"))?;

    Ok(GenerateResponse {
        content,
        model: resp.model,
        finish_reason: choice.finish_reason,
        usage: resp.usage,
    })
}

/// POST `body` to `url` and decode the reply. Non-2xx statuses become
/// `Error::ProviderError` carrying the status and response text.
pub async fn post_chat_completion(
    client: &Client,
    url: &str,
    headers: &Headers,
    body: &ChatCompletionRequest<'_>,
    service: &str,
) -> Result<GenerateResponse> {
    let response = client
        .post(url)
        .headers(headers.to_reqwest_headers())
        .json(body)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(Error::provider_error(format!(
            "{} API error {}: {}",
            service, status, error_text
        )));
    }

    let text = response.text().await?;
    let resp: ChatCompletionResponse = serde_json::from_str(&text)?;
    from_chat_response(resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SamplingOptions;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest::new(vec![Message::user("hi")]);
        let body = serde_json::to_value(ChatCompletionRequest::new(&request, None)).unwrap();

        assert!(body.get("model").is_none());
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hi");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"].as_f64().unwrap() as f32, 0.9);
        assert_eq!(body["top_p"].as_f64().unwrap() as f32, 0.95);
        assert_eq!(body["frequency_penalty"].as_f64(), Some(0.0));
        assert_eq!(body["presence_penalty"].as_f64(), Some(0.0));
        assert!(body["stop"].is_null());
        assert!(body.as_object().unwrap().contains_key("stop"));
    }

    #[test]
    fn test_request_body_with_model_and_stop() {
        let options = SamplingOptions {
            stop: Some(vec!["END".to_string()]),
            ..SamplingOptions::default()
        };
        let request = GenerateRequest::new(vec![Message::user("hi")]).with_options(options);
        let body = serde_json::to_value(ChatCompletionRequest::new(&request, Some("gpt-4o"))).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["stop"][0], "END");
    }

    #[test]
    fn test_from_chat_response_takes_first_choice() {
        let resp: ChatCompletionResponse = serde_json::from_str(
            r#"{"model":"gpt-35-turbo","choices":[
                {"message":{"role":"assistant","content":"first"},"finish_reason":"stop"},
                {"message":{"role":"assistant","content":"second"}}
            ],"usage":{"prompt_tokens":3,"completion_tokens":1,"total_tokens":4}}"#,
        )
        .unwrap();
        let out = from_chat_response(resp).unwrap();
        assert_eq!(out.content, "first");
        assert_eq!(out.model.as_deref(), Some("gpt-35-turbo"));
        assert_eq!(out.finish_reason.as_deref(), Some("stop"));
        assert_eq!(out.usage.unwrap().total_tokens, 4);
    }

    #[test]
    fn test_from_chat_response_without_choices() {
        let resp: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        let err = from_chat_response(resp).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn test_from_chat_response_null_content() {
        let resp: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(from_chat_response(resp).is_err());
    }
}
