use redlens_claude::ClaudeError;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// Per-query search failures and per-post comment-fetch failures are NOT
/// represented here: they are collected (or logged) and the run continues
/// on whatever succeeded.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The request failed validation; no network call was made.
    #[error("{0}")]
    InvalidRequest(String),

    /// Every search call failed or returned nothing.
    #[error("{}", no_results_message(.errors))]
    NoResults { errors: Vec<String> },

    /// The report generation call failed.
    #[error("report generation failed: {0}")]
    Generation(#[from] ClaudeError),
}

/// How many collected search error messages to surface to the caller.
const MAX_REPORTED_ERRORS: usize = 3;

fn no_results_message(errors: &[String]) -> String {
    let mut message = String::from(
        "no Reddit posts found for the given search criteria; \
         try broader keywords or different subreddits",
    );
    if !errors.is_empty() {
        let detail = errors
            .iter()
            .take(MAX_REPORTED_ERRORS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        message.push_str(" (errors: ");
        message.push_str(&detail);
        message.push(')');
    }
    message
}
