//! Comparator backed by an OpenAI-compatible chat completions endpoint.
//!
//! The model is asked for a JSON object with a single boolean `match` key.
//! A missing or non-boolean `match` counts as no match.

use crate::config::toml_config::PromptConfig;
use crate::config::OpenAiSettings;
use crate::domain::ports::Comparator;
use crate::utils::error::{GameError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    r#type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct OpenAiComparator {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    prompt: PromptConfig,
}

impl OpenAiComparator {
    /// Fails with `ComparatorNotConfigured` when no credential is present.
    pub fn new(settings: &OpenAiSettings, prompt: PromptConfig) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| GameError::ComparatorNotConfigured {
                reason: format!("{} is not set", crate::config::API_KEY_ENV),
            })?;

        Ok(Self {
            client: Client::new(),
            endpoint: format!("{}/chat/completions", settings.api_base.trim_end_matches('/')),
            api_key,
            model: settings.model.clone(),
            prompt,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn parse_verdict(body: &str) -> Result<bool> {
        let response: ChatResponse =
            serde_json::from_str(body).map_err(|e| GameError::MalformedResponseError {
                message: format!("response body is not a chat completion: {}", e),
            })?;

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GameError::MalformedResponseError {
                message: "response has no message content".to_string(),
            })?;

        let verdict: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| GameError::MalformedResponseError {
                message: format!("message content is not JSON: {}", e),
            })?;

        let fields = verdict
            .as_object()
            .ok_or_else(|| GameError::MalformedResponseError {
                message: format!("message content is not a JSON object: {}", content),
            })?;

        Ok(fields
            .get("match")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false))
    }
}

#[async_trait]
impl Comparator for OpenAiComparator {
    async fn judge(&self, expected: &str, spoken: &str) -> Result<bool> {
        let user_prompt = self.prompt.render_user(expected, spoken);
        let request = ChatRequest {
            model: &self.model,
            response_format: ResponseFormat {
                r#type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
        };

        tracing::debug!("Sending comparison to {} (model {})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Model response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GameError::UpstreamStatusError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        Self::parse_verdict(&body)
    }

    fn name(&self) -> &str {
        "openai"
    }
}
