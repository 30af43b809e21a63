//! Priority classification.
//!
//! Brand (and alias) mentions always win: a post comparing the brand to a
//! competitor is a brand conversation first, so it classifies URGENT rather
//! than HIGH. Competitor-only posts are HIGH; everything else MEDIUM.

use std::collections::HashSet;

use crate::relevance::lowercase_terms;
use crate::types::{AnalyzeRequest, Post, Priority};

/// Assigns a priority to every post in place.
pub(crate) fn classify_posts(posts: &mut [Post], brand: &str, request: &AnalyzeRequest) {
    let brand_terms = lowercase_terms(
        std::iter::once(brand).chain(request.aliases.iter().map(String::as_str)),
    );
    let competitor_terms = lowercase_terms(request.competitors.iter().map(String::as_str));

    for post in posts {
        post.priority = classify(post, &brand_terms, &competitor_terms);
    }
}

fn classify(
    post: &Post,
    brand_terms: &HashSet<String>,
    competitor_terms: &HashSet<String>,
) -> Priority {
    let text = format!("{} {}", post.title, post.selftext).to_lowercase();

    if brand_terms.iter().any(|term| text.contains(term)) {
        Priority::Urgent
    } else if competitor_terms.iter().any(|term| text.contains(term)) {
        Priority::High
    } else {
        Priority::Medium
    }
}
