//! Duplicate collapsing by normalized submission id.
//!
//! The same submission can arrive from several queries, sometimes with the
//! `t3_` link prefix and sometimes without. Normalization strips the prefix;
//! the first arrival wins and order is preserved.

use std::collections::HashSet;

use crate::types::Post;

const LINK_PREFIX: &str = "t3_";

/// Strips the `t3_` link prefix if present.
pub(crate) fn normalize_post_id(id: &str) -> &str {
    id.strip_prefix(LINK_PREFIX).unwrap_or(id)
}

/// Keeps the first post seen per normalized id; drops posts whose id is
/// empty after normalization. Idempotent.
pub(crate) fn dedup_posts(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|post| {
            let id = normalize_post_id(&post.id);
            !id.is_empty() && seen.insert(id.to_string())
        })
        .collect()
}
