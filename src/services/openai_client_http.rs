//! OpenAI API client implementation using blocking reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, OpenAiConfig};
use crate::ports::CompletionClient;

const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// HTTP transport for the text-completion and image-generation endpoints.
///
/// Each call performs a single blocking request; failures propagate to the
/// caller with no retry.
#[derive(Clone)]
pub struct HttpOpenAiClient {
    api_key: String,
    config: OpenAiConfig,
    client: Client,
}

impl std::fmt::Debug for HttpOpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOpenAiClient")
            .field("config", &self.config)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpOpenAiClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: OpenAiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::RequestFailed {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, config, client })
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env(config: OpenAiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| AppError::EnvironmentVariableMissing(API_KEY_VAR.into()))?;

        Self::new(api_key, config)
    }

    fn post_json<B: Serialize>(&self, url: &Url, body: &B) -> Result<(u16, String), AppError> {
        let response = self
            .client
            .post(url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .map_err(|e| AppError::RequestFailed {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if !status.is_success() {
            let message = extract_error_message(&body_text).unwrap_or_else(|| {
                if !body_text.trim().is_empty() {
                    body_text.clone()
                } else if status.is_server_error() {
                    "Server error".to_string()
                } else {
                    "API request failed".to_string()
                }
            });
            return Err(AppError::RequestFailed { message, status: Some(status.as_u16()) });
        }

        Ok((status.as_u16(), body_text))
    }

    fn download_image(&self, image_url: &str) -> Result<Vec<u8>, AppError> {
        let response =
            self.client.get(image_url).send().map_err(|e| AppError::ImageFetch {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ImageFetch {
                message: format!("Image download returned HTTP {}", status.as_u16()),
                status: Some(status.as_u16()),
            });
        }

        let bytes = response.bytes().map_err(|e| AppError::ImageFetch {
            message: format!("Failed to read image body: {}", e),
            status: Some(status.as_u16()),
        })?;

        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: String,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpOpenAiClient {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage { role: "user", content: prompt }],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let (status, body) = self.post_json(&self.config.chat_url, &request)?;

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| AppError::RequestFailed {
                message: format!("Failed to parse completion response: {}", e),
                status: Some(status),
            })?;

        let choice = parsed.choices.into_iter().next().ok_or(AppError::RequestFailed {
            message: "No choices in completion response".to_string(),
            status: Some(status),
        })?;

        Ok(choice.message.content)
    }

    fn generate_image(&self, prompt: &str) -> Result<Vec<u8>, AppError> {
        let request = ImageRequest {
            model: &self.config.image_model,
            prompt,
            n: 1,
            size: &self.config.image_size,
        };

        let (status, body) = self.post_json(&self.config.image_url, &request)?;

        let parsed: ImageResponse =
            serde_json::from_str(&body).map_err(|e| AppError::RequestFailed {
                message: format!("Failed to parse image response: {}", e),
                status: Some(status),
            })?;

        let image = parsed.data.into_iter().next().ok_or(AppError::RequestFailed {
            message: "No image URL in response".to_string(),
            status: Some(status),
        })?;

        self.download_image(&image.url)
    }
}
