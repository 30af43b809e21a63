use redlens_pullpush::RawSubmission;
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// One analysis request: the brand under scrutiny plus the optional context
/// lists that drive query generation, relevance filtering and priority
/// classification.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub brand: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub subreddits: Vec<String>,
}

impl AnalyzeRequest {
    /// Validates the request before any network call.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidRequest`] when `brand` is blank or
    /// when all four optional lists are empty.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.brand.trim().is_empty() {
            return Err(PipelineError::InvalidRequest(
                "the 'brand' field is required".to_string(),
            ));
        }

        let has_optional = !self.aliases.is_empty()
            || !self.competitors.is_empty()
            || !self.keywords.is_empty()
            || !self.subreddits.is_empty();
        if !has_optional {
            return Err(PipelineError::InvalidRequest(
                "at least one of 'aliases', 'competitors', 'keywords', or 'subreddits' \
                 must be provided"
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Post priority assigned by the classifier.
///
/// Brand mentions outrank competitor mentions even when both appear in the
/// same post; everything else is background noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Urgent,
    High,
    Medium,
}

impl Priority {
    /// Sort rank: lower is more important.
    #[must_use]
    pub fn severity(self) -> u8 {
        match self {
            Priority::Urgent => 0,
            Priority::High => 1,
            Priority::Medium => 2,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Urgent => write!(f, "URGENT"),
            Priority::High => write!(f, "HIGH"),
            Priority::Medium => write!(f, "MEDIUM"),
        }
    }
}

/// A curated Reddit submission flowing through the pipeline.
#[derive(Debug, Clone)]
pub struct Post {
    /// Submission id as returned by the search index; may still carry the
    /// `t3_` link prefix. Normalized forms are derived where needed.
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub subreddit: String,
    pub score: i64,
    pub num_comments: i64,
    pub permalink: String,
    /// The search query that produced this post.
    pub matched_query: String,
    pub priority: Priority,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Converts a raw search result, tagging it with the producing query.
    pub(crate) fn from_raw(raw: RawSubmission, matched_query: &str) -> Self {
        let subreddit = raw
            .subreddit
            .filter(|s| !s.is_empty())
            .or_else(|| {
                raw.subreddit_prefixed
                    .map(|s| s.trim_start_matches("r/").to_string())
            })
            .unwrap_or_default();

        Self {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            selftext: raw.selftext.unwrap_or_default(),
            subreddit,
            score: raw.score.unwrap_or(0),
            num_comments: raw.num_comments.unwrap_or(0),
            permalink: raw.permalink.unwrap_or_default(),
            matched_query: matched_query.to_string(),
            priority: Priority::Medium,
            comments: Vec::new(),
        }
    }

    /// Combined engagement used by the ranker.
    pub(crate) fn engagement(&self) -> i64 {
        self.score + self.num_comments
    }
}

/// A curated comment attached to a post after enrichment.
#[derive(Debug, Clone)]
pub struct Comment {
    pub author: String,
    pub body: String,
    pub score: i64,
}

/// Result statistics returned alongside the report.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisStats {
    pub posts_found: usize,
    pub posts_analyzed: usize,
    pub cost_estimate: f64,
}

/// A successful pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub report: String,
    pub stats: AnalysisStats,
}

/// Caps and truncation budgets for one pipeline run.
///
/// Passed explicitly rather than read from globals so tests can shrink any
/// limit independently. [`PipelineLimits::default`] carries the production
/// values.
#[derive(Debug, Clone)]
pub struct PipelineLimits {
    /// Maximum number of generated search queries.
    pub max_queries: usize,
    /// Result cap requested per search call.
    pub max_search_results: usize,
    /// How many requested subreddits get a scoped search with the primary
    /// query.
    pub max_scoped_subreddits: usize,
    /// How many top-ranked posts receive comment enrichment.
    pub top_posts_for_comments: usize,
    /// Comment cap per enriched post, both requested and kept.
    pub comment_fetch_limit: usize,
    /// Character budget for each enriched comment body.
    pub comment_body_max_chars: usize,
    /// Character budget for a post body embedded in the prompt.
    pub prompt_body_max_chars: usize,
    /// How many comments per post are embedded in the prompt.
    pub prompt_comments_per_post: usize,
    /// Character budget for a comment body embedded in the prompt.
    pub prompt_comment_max_chars: usize,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        Self {
            max_queries: 4,
            max_search_results: 25,
            max_scoped_subreddits: 3,
            top_posts_for_comments: 5,
            comment_fetch_limit: 15,
            comment_body_max_chars: 800,
            prompt_body_max_chars: 600,
            prompt_comments_per_post: 10,
            prompt_comment_max_chars: 300,
        }
    }
}
