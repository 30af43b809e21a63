//! PullPush API response types.
//!
//! Every PullPush search endpoint wraps its results in a `{"data": [...]}`
//! envelope. Field coverage on Reddit records is inconsistent (deleted posts
//! drop `selftext`, some records carry only the `r/`-prefixed subreddit
//! name), so everything except `id` is optional and defaulted.

use serde::Deserialize;

/// Envelope for all PullPush search responses.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchEnvelope<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

/// A Reddit submission as returned by `/reddit/search/submission/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    /// Base-36 submission id, sometimes carrying the `t3_` link prefix.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub selftext: Option<String>,
    #[serde(default)]
    pub subreddit: Option<String>,
    /// `r/`-prefixed subreddit name, present on some records where the bare
    /// `subreddit` field is missing.
    #[serde(default)]
    pub subreddit_prefixed: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub num_comments: Option<i64>,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// A Reddit comment as returned by `/reddit/search/comment/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComment {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
}
