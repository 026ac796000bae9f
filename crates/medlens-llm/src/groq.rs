//! Groq LLM provider implementation (OpenAI-compatible chat completions).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use medlens_core::error::{MedlensError, MedlensResult};
use medlens_core::traits::{GenerationOptions, Llm, LlmConfig, LlmResponse, TokenUsage};
use medlens_core::types::{Message, MessageRole};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

/// Groq LLM provider.
#[derive(Debug)]
pub struct GroqLlm {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
struct GroqMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    #[serde(default)]
    usage: Option<GroqUsage>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqResponseMessage,
}

#[derive(Debug, Deserialize)]
struct GroqResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroqUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GroqError {
    error: GroqErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GroqErrorDetail {
    message: String,
}

impl GroqLlm {
    /// Create a new Groq LLM provider.
    pub fn new(config: LlmConfig) -> MedlensResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .ok_or_else(|| {
                MedlensError::Configuration(
                    "Groq API key not found. Set GROQ_API_KEY environment variable or provide api_key in config.".to_string(),
                )
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "authorization",
            format!("Bearer {}", api_key)
                .parse()
                .map_err(|_| MedlensError::Configuration("Invalid API key format".to_string()))?,
        );
        headers.insert(
            "content-type",
            "application/json"
                .parse()
                .map_err(|_| MedlensError::Configuration("Invalid content type".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                MedlensError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GROQ_API_URL.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = medlens_core::DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn to_groq_messages(messages: &[Message]) -> Vec<GroqMessage> {
        messages
            .iter()
            .map(|m| GroqMessage {
                role: match m.role {
                    MessageRole::System => "system".to_string(),
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "assistant".to_string(),
                },
                content: m.content.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Llm for GroqLlm {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> MedlensResult<LlmResponse> {
        let options = options.unwrap_or_default();

        let request = GroqRequest {
            model: self.config.model.clone(),
            messages: Self::to_groq_messages(messages),
            temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
            max_tokens: Some(options.max_tokens.unwrap_or(self.config.max_tokens)),
            top_p: options.top_p,
        };

        debug!(model = %request.model, "sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| MedlensError::network_with_source("Groq API request failed", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| MedlensError::network_with_source("Failed to read response body", e))?;

        if !status.is_success() {
            let parsed: Result<GroqError, _> = serde_json::from_str(&body);
            let message = parsed.map(|e| e.error.message).unwrap_or(body);
            return Err(MedlensError::from_provider_status(status.as_u16(), &message));
        }

        let response: GroqResponse = serde_json::from_str(&body)
            .map_err(|e| MedlensError::llm(format!("Failed to parse response: {}", e)))?;

        // Only the first choice's message content matters; every other
        // field of the provider response is opaque.
        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);

        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(LlmResponse { content, usage })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
