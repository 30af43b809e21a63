//! HTTP client for the PullPush.io Reddit search API.
//!
//! Wraps `reqwest` with typed response deserialization and explicit errors.
//! Submission searches are always requested sorted by descending score so
//! the highest-engagement posts arrive first.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::PullPushError;
use crate::types::{RawComment, RawSubmission, SearchEnvelope};

const DEFAULT_BASE_URL: &str = "https://api.pullpush.io";
const SUBMISSION_SEARCH_PATH: &str = "reddit/search/submission/";
const COMMENT_SEARCH_PATH: &str = "reddit/search/comment/";

/// Client for the PullPush.io search API.
///
/// Use [`PullPushClient::new`] for production or
/// [`PullPushClient::with_base_url`] to point at a mock server in tests.
#[derive(Clone)]
pub struct PullPushClient {
    client: Client,
    base_url: Url,
}

impl PullPushClient {
    /// Creates a new client pointed at the production PullPush API.
    ///
    /// # Errors
    ///
    /// Returns [`PullPushError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, PullPushError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PullPushError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PullPushError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, PullPushError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("redlens/0.1 (brand-intelligence)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| PullPushError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Searches Reddit submissions matching `query`, optionally scoped to a
    /// single subreddit, sorted by descending score.
    ///
    /// # Errors
    ///
    /// - [`PullPushError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PullPushError::Deserialize`] if the response does not match the
    ///   expected envelope shape.
    pub async fn search_submissions(
        &self,
        query: &str,
        subreddit: Option<&str>,
        limit: usize,
    ) -> Result<Vec<RawSubmission>, PullPushError> {
        let size = limit.to_string();
        let mut params: Vec<(&str, &str)> = vec![
            ("q", query),
            ("size", &size),
            ("sort_type", "score"),
            ("sort", "desc"),
        ];
        if let Some(sr) = subreddit {
            params.push(("subreddit", sr));
        }

        let url = self.build_url(SUBMISSION_SEARCH_PATH, &params)?;
        let envelope: SearchEnvelope<RawSubmission> = self.get_json(&url).await?;
        Ok(envelope.data)
    }

    /// Fetches comments for a submission by its bare (un-prefixed) link id,
    /// sorted by score.
    ///
    /// # Errors
    ///
    /// - [`PullPushError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PullPushError::Deserialize`] if the response does not match the
    ///   expected envelope shape.
    pub async fn search_comments(
        &self,
        link_id: &str,
        limit: usize,
    ) -> Result<Vec<RawComment>, PullPushError> {
        let size = limit.to_string();
        let params: Vec<(&str, &str)> =
            vec![("link_id", link_id), ("size", &size), ("sort", "score")];

        let url = self.build_url(COMMENT_SEARCH_PATH, &params)?;
        let envelope: SearchEnvelope<RawComment> = self.get_json(&url).await?;
        Ok(envelope.data)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, PullPushError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| PullPushError::InvalidBaseUrl(format!("'{}': {e}", self.base_url)))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as the expected type.
    async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, PullPushError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PullPushError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
