//! Search orchestration.
//!
//! Issues one submission search per generated query, plus up to three
//! scoped searches (primary query only) when target subreddits were
//! requested. Failures are collected and logged per call; a run only fails
//! later if the combined result set is empty.

use redlens_pullpush::PullPushClient;

use crate::types::{PipelineLimits, Post};

pub(crate) async fn collect_posts(
    client: &PullPushClient,
    queries: &[String],
    subreddits: &[String],
    limits: &PipelineLimits,
) -> (Vec<Post>, Vec<String>) {
    let mut posts = Vec::new();
    let mut errors = Vec::new();

    for query in queries {
        match client
            .search_submissions(query, None, limits.max_search_results)
            .await
        {
            Ok(results) => {
                tracing::debug!(query = %query, count = results.len(), "submission search ok");
                posts.extend(results.into_iter().map(|raw| Post::from_raw(raw, query)));
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "submission search failed");
                errors.push(e.to_string());
            }
        }
    }

    // Scoped passes reuse the primary query only.
    if let Some(primary) = queries.first() {
        for subreddit in subreddits.iter().take(limits.max_scoped_subreddits) {
            match client
                .search_submissions(primary, Some(subreddit), limits.max_search_results)
                .await
            {
                Ok(results) => {
                    tracing::debug!(
                        query = %primary,
                        subreddit = %subreddit,
                        count = results.len(),
                        "scoped submission search ok"
                    );
                    let tag = format!("{primary} (r/{subreddit})");
                    posts.extend(results.into_iter().map(|raw| Post::from_raw(raw, &tag)));
                }
                Err(e) => {
                    tracing::warn!(
                        query = %primary,
                        subreddit = %subreddit,
                        error = %e,
                        "scoped submission search failed"
                    );
                    errors.push(e.to_string());
                }
            }
        }
    }

    (posts, errors)
}
