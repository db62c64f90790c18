use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub prompt_prefix_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }
}

/// Body of a chat-completions call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("failed to reach completion API: {0}")]
    Transport(#[from] reqwest::Error),
    /// Upstream rejected the call. Displays the upstream message verbatim.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    #[error("completion API returned an unexpected response: {0}")]
    MalformedResponse(String),
}

/// The hosted model that turns a prompt into generated text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(%status, "completion API call failed");
            return Err(CompletionError::Api {
                status,
                message: api_error_message(status, &body),
            });
        }

        parse_completion(&body)
    }
}

fn parse_completion(body: &str) -> Result<String, CompletionError> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CompletionError::MalformedResponse("no choices".to_string()))?
        .message
        .content
        .ok_or_else(|| CompletionError::MalformedResponse("choice has no content".to_string()))
}

fn api_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => format!("completion API returned {status}"),
        Err(_) => format!("completion API returned {status}: {}", body.trim()),
    }
}
