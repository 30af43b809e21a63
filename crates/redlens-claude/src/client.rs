//! Messages API client.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ClaudeError;
use crate::types::{Generation, Message, MessagesRequest, MessagesResponse, TokenPrices};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// How much of an error response body to keep in the error message.
const ERROR_BODY_SNIPPET: usize = 500;

/// Client for the Anthropic Messages API.
///
/// Use [`ClaudeClient::new`] for production or
/// [`ClaudeClient::with_base_url`] to point at a mock server in tests.
/// No `Debug` derive: the struct holds the API key.
#[derive(Clone)]
pub struct ClaudeClient {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: u32,
    prices: TokenPrices,
    base_url: Url,
}

impl ClaudeClient {
    /// Creates a new client pointed at the production Anthropic API.
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        model: &str,
        max_tokens: u32,
        timeout_secs: u64,
    ) -> Result<Self, ClaudeError> {
        Self::with_base_url(api_key, model, max_tokens, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClaudeError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        max_tokens: u32,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ClaudeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("redlens/0.1 (brand-intelligence)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| ClaudeError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            max_tokens,
            prices: TokenPrices::default(),
            base_url,
        })
    }

    /// The per-token rates this client prices generations at.
    #[must_use]
    pub fn prices(&self) -> TokenPrices {
        self.prices
    }

    /// Sends `prompt` as a single user message and returns the generated
    /// text along with token usage.
    ///
    /// Text blocks in the response are joined with newlines; non-text blocks
    /// are skipped.
    ///
    /// # Errors
    ///
    /// - [`ClaudeError::Api`] if the API responds with a non-2xx status.
    /// - [`ClaudeError::Http`] on network failure.
    /// - [`ClaudeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn generate(&self, prompt: &str) -> Result<Generation, ClaudeError> {
        let url = self
            .base_url
            .join(MESSAGES_PATH)
            .map_err(|e| ClaudeError::InvalidBaseUrl(format!("'{}': {e}", self.base_url)))?;

        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(url.clone())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message: String = body.chars().take(ERROR_BODY_SNIPPET).collect();
            return Err(ClaudeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: MessagesResponse =
            serde_json::from_str(&body).map_err(|e| ClaudeError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let text = parsed
            .content
            .iter()
            .filter(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        tracing::debug!(
            model = %self.model,
            input_tokens = parsed.usage.input_tokens,
            output_tokens = parsed.usage.output_tokens,
            "generation complete"
        );

        Ok(Generation {
            text,
            usage: parsed.usage,
        })
    }
}
