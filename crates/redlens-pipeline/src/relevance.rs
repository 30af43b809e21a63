//! Relevance filtering.
//!
//! A post stays when it sits in one of the requested subreddits or when any
//! brand/alias/competitor/keyword term appears in its lowercased title+body.
//! When nothing matches at all, the whole deduplicated set passes through
//! unchanged rather than failing the run.

use std::collections::HashSet;

use crate::types::{AnalyzeRequest, Post};

/// Builds a lowercase term set, skipping blank entries (an empty term would
/// substring-match every post).
pub(crate) fn lowercase_terms<'a, I>(terms: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    terms
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Applies the relevance filter with its fallback.
pub(crate) fn filter_relevant(posts: Vec<Post>, brand: &str, request: &AnalyzeRequest) -> Vec<Post> {
    let terms = lowercase_terms(
        std::iter::once(brand)
            .chain(request.aliases.iter().map(String::as_str))
            .chain(request.competitors.iter().map(String::as_str))
            .chain(request.keywords.iter().map(String::as_str)),
    );
    let subreddits = lowercase_terms(request.subreddits.iter().map(String::as_str));

    let matched: Vec<bool> = posts
        .iter()
        .map(|post| is_relevant(post, &terms, &subreddits))
        .collect();

    if matched.iter().any(|m| *m) {
        posts
            .into_iter()
            .zip(matched)
            .filter_map(|(post, keep)| keep.then_some(post))
            .collect()
    } else {
        // Fallback: nothing matched, keep the whole set.
        posts
    }
}

fn is_relevant(post: &Post, terms: &HashSet<String>, subreddits: &HashSet<String>) -> bool {
    if !subreddits.is_empty() && subreddits.contains(&post.subreddit.to_lowercase()) {
        return true;
    }
    let text = format!("{} {}", post.title, post.selftext).to_lowercase();
    terms.iter().any(|term| text.contains(term))
}
