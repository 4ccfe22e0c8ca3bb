//! Endpoint and sampling configuration for the OpenAI-compatible APIs.

use url::Url;

/// Configuration for the text-completion and image-generation endpoints.
///
/// Defaults target the production OpenAI API; tests override the URLs to
/// point at a local mock server.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Chat-completions endpoint.
    pub chat_url: Url,
    /// Image-generations endpoint.
    pub image_url: Url,
    /// Model identifier for text completions.
    pub model: String,
    /// Model identifier for image generation.
    pub image_model: String,
    /// Maximum output length per completion.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
    /// Requested image resolution (fixed square).
    pub image_size: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            chat_url: Url::parse("https://api.openai.com/v1/chat/completions")
                .expect("default chat URL is valid"),
            image_url: Url::parse("https://api.openai.com/v1/images/generations")
                .expect("default image URL is valid"),
            model: "gpt-4o".to_string(),
            image_model: "dall-e-3".to_string(),
            max_tokens: 500,
            temperature: 0.7,
            image_size: "1024x1024".to_string(),
            timeout_secs: 120,
        }
    }
}
