//! Ranking.
//!
//! Stable sort by priority severity, then combined engagement (score +
//! comment count) descending. Stability matters: posts with identical keys
//! keep their arrival order, which downstream tests rely on.

use crate::types::Post;

pub(crate) fn rank_posts(posts: &mut [Post]) {
    posts.sort_by_key(|post| (post.priority.severity(), -post.engagement()));
}
