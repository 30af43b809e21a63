//! Messages API request/response types and cost accounting.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    pub model: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Message<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub usage: TokenUsage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: String,
}

/// Token counts reported by the API for one generation call.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
}

/// A completed generation: report text plus the token usage that produced it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

/// Published USD rates per million tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokenPrices {
    pub input_usd_per_mtok: f64,
    pub output_usd_per_mtok: f64,
}

impl Default for TokenPrices {
    /// Claude Sonnet pricing: $3 per million input tokens, $15 per million
    /// output tokens.
    fn default() -> Self {
        Self {
            input_usd_per_mtok: 3.0,
            output_usd_per_mtok: 15.0,
        }
    }
}

impl TokenPrices {
    /// Estimates the USD cost of one call, rounded to 4 decimal places.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn estimate_cost(&self, usage: TokenUsage) -> f64 {
        let raw = (usage.input_tokens as f64 * self.input_usd_per_mtok
            + usage.output_tokens as f64 * self.output_usd_per_mtok)
            / 1_000_000.0;
        (raw * 10_000.0).round() / 10_000.0
    }
}
