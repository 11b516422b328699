//! Chat completions client
//!
//! Sends the transcript to an OpenAI-style completions endpoint and returns
//! the first choice as the assistant reply.

use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use super::status_error;
use crate::config::settings::ChatSettings;
use crate::error::{VerziError, VerziResult};
use crate::models::ChatMessage;
use crate::services::ChatBackend;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct ChatClient {
    endpoint: Url,
    model: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl ChatClient {
    pub fn new(endpoint: &str, model: impl Into<String>, api_key: Option<String>) -> VerziResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| VerziError::Config(format!("invalid chat endpoint: {err}")))?;
        Ok(Self {
            endpoint,
            model: model.into(),
            api_key,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_settings(settings: &ChatSettings) -> VerziResult<Self> {
        let mut client = Self::new(
            &settings.endpoint,
            settings.model.clone(),
            settings.resolve_api_key(),
        )?;
        client.http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(client)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ChatBackend for ChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> VerziResult<ChatMessage> {
        let payload = CompletionRequest {
            model: &self.model,
            messages,
        };
        debug!(model = %self.model, messages = messages.len(), "requesting chat completion");

        let mut request = self.http.post(self.endpoint.clone()).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let res = request.send().await?;

        if res.status().is_success() {
            let body = res.json::<CompletionResponse>().await?;
            return first_choice(body);
        }

        let status = res.status();
        let message = res
            .json::<ErrorResponse>()
            .await
            .map(|err| err.error.message)
            .unwrap_or_else(|_| "unknown error".to_string());

        Err(VerziError::Chat(status_error(status, &message)))
    }
}

fn first_choice(body: CompletionResponse) -> VerziResult<ChatMessage> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or_else(|| VerziError::Chat("response contained no choices".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use serde_json::json;

    #[test]
    fn test_request_body() {
        let messages = vec![ChatMessage::assistant("Hi"), ChatMessage::user("Hello")];
        let body = serde_json::to_value(CompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    { "role": "assistant", "content": "Hi" },
                    { "role": "user", "content": "Hello" }
                ]
            })
        );
    }

    #[test]
    fn test_parse_first_choice() {
        let body: CompletionResponse = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Sure." }, "finish_reason": "stop" }
            ]
        }))
        .unwrap();

        let reply = first_choice(body).unwrap();
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, "Sure.");
    }

    #[test]
    fn test_no_choices_is_error() {
        let body = CompletionResponse { choices: Vec::new() };
        assert!(matches!(first_choice(body), Err(VerziError::Chat(_))));
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = ChatClient::new("not a url", "m", None).unwrap_err();
        assert!(matches!(err, VerziError::Config(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = ChatClient::new("http://127.0.0.1:9/v1/chat/completions", "m", None).unwrap();
        let err = client.complete(&[ChatMessage::user("hi")]).await.unwrap_err();
        assert!(matches!(err, VerziError::Http(_)));
    }
}
