//! Comment enrichment for the top-ranked posts.
//!
//! Only the first `top_posts_for_comments` posts get a comment fetch; the
//! rest keep their empty list. A failed fetch leaves that one post without
//! comments and the run continues.

use redlens_pullpush::{PullPushClient, RawComment};

use crate::dedup::normalize_post_id;
use crate::types::{Comment, PipelineLimits, Post};

const DELETED_AUTHOR: &str = "[deleted]";

pub(crate) async fn attach_comments(
    client: &PullPushClient,
    posts: &mut [Post],
    limits: &PipelineLimits,
) {
    for post in posts.iter_mut().take(limits.top_posts_for_comments) {
        let link_id = normalize_post_id(&post.id);
        if link_id.is_empty() {
            continue;
        }

        match client
            .search_comments(link_id, limits.comment_fetch_limit)
            .await
        {
            Ok(raw) => {
                post.comments = curate_comments(raw, limits);
                tracing::debug!(
                    post_id = %post.id,
                    count = post.comments.len(),
                    "comments attached"
                );
            }
            Err(e) => {
                tracing::warn!(
                    post_id = %post.id,
                    error = %e,
                    "comment fetch failed; continuing without comments"
                );
                post.comments = Vec::new();
            }
        }
    }
}

/// Drops deleted/removed/empty bodies, truncates the survivors, and caps
/// the list.
pub(crate) fn curate_comments(raw: Vec<RawComment>, limits: &PipelineLimits) -> Vec<Comment> {
    raw.into_iter()
        .filter_map(|comment| {
            let body = comment.body.unwrap_or_default();
            if body.is_empty() || body == "[deleted]" || body == "[removed]" {
                return None;
            }
            Some(Comment {
                author: comment
                    .author
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| DELETED_AUTHOR.to_string()),
                body: body.chars().take(limits.comment_body_max_chars).collect(),
                score: comment.score.unwrap_or(0),
            })
        })
        .take(limits.comment_fetch_limit)
        .collect()
}
