use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "llama-3.3-70b-versatile";
const MAX_COMPLETION_TOKENS: u32 = 2000;
const SAMPLING_TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Single chat completion against the model provider. One outbound call
/// per invocation; retries are a caller policy, not implemented here.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

pub struct GroqClient {
    client: Client,
    api_key: SecretString,
}

impl GroqClient {
    pub fn new(api_key: SecretString) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");
        Self { client, api_key }
    }

    pub fn model_version(&self) -> &'static str {
        GROQ_MODEL
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        let request = ChatRequest {
            model: GROQ_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system_prompt.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt.to_string(),
                },
            ],
            temperature: SAMPLING_TEMPERATURE,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamUnavailable(format!(
                "model provider returned {status}: {error_text}"
            )));
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(AppError::MalformedResponse(
                "model returned an empty completion".to_string(),
            ));
        }
        Ok(content)
    }
}
