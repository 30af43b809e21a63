//! HTTP client for the Anthropic Messages API.
//!
//! The pipeline treats report generation as a single blocking call: one
//! prompt in, one Markdown report plus token usage out. This crate wraps
//! that call with typed request/response structures, explicit errors, and
//! cost estimation at the published per-token rates for the configured
//! model. One attempt per call; a failure is fatal for the pipeline run.

mod client;
mod error;
mod types;

pub use client::ClaudeClient;
pub use error::ClaudeError;
pub use types::{Generation, TokenPrices, TokenUsage};
