//! Analysis prompt assembly.
//!
//! Pure text rendering: given the curated post list and request context,
//! produce the full analyst prompt. No I/O, and byte-identical output for
//! identical input; the pipeline integration tests depend on that.

use crate::types::{AnalyzeRequest, PipelineLimits, Post};

const REDDIT_HOST: &str = "https://reddit.com";

pub(crate) fn build_analysis_prompt(
    brand: &str,
    request: &AnalyzeRequest,
    posts: &[Post],
    limits: &PipelineLimits,
) -> String {
    let mut posts_text = String::new();
    for (index, post) in posts.iter().enumerate() {
        render_post(&mut posts_text, index + 1, post, limits);
    }

    let aliases = list_or_none(&request.aliases);
    let competitors = list_or_none(&request.competitors);
    let keywords = list_or_none(&request.keywords);

    format!(
        r#"You are a brand intelligence analyst. Analyze the following Reddit posts and comments about "{brand}" and its competitive landscape.

BRAND: {brand}
ALIASES: {aliases}
COMPETITORS: {competitors}
KEYWORDS: {keywords}

REDDIT DATA:
{posts_text}

Produce a structured Markdown intelligence report with ALL of the following sections. Use tables where indicated. Be specific — cite actual Reddit quotes and data points.

# Brand Intelligence Report: {brand}

## 1. Brand Perception
Analyze how the brand is discussed on Reddit. Include a table:
| Sentiment | Quote | Subreddit | Context |
|-----------|-------|-----------|---------|

## 2. Competitive Landscape
Compare the brand against competitors mentioned in Reddit discussions.
| Competitor | Mentions | Perceived Strengths | Perceived Weaknesses | Market Position |
|------------|----------|---------------------|----------------------|-----------------|

## 3. Market Insights
Identify market trends and buyer needs from the discussions.
| Buyer Need | Evidence (Quote/Reference) | Implication for {brand} |
|------------|---------------------------|------------------------|

## 4. Pain Points & Opportunities
| Pain Point | Frequency | Severity | Opportunity for {brand} |
|------------|-----------|----------|------------------------|

## 5. Recommendation Patterns
How do Reddit users recommend solutions in this space?
| Situation | Recommended Solution | Reason Given |
|-----------|---------------------|--------------|

## 6. Key Threats
| Threat | Source | Severity | Mitigation Strategy |
|--------|--------|----------|---------------------|

## 7. Actionable Recommendations
| Area | Recommended Action | Rationale |
|------|-------------------|-----------|

## 8. Quote Bank
The most valuable direct quotes from Reddit for marketing and product teams.
| Quote | Source (Subreddit/User) | Strategic Insight |
|-------|------------------------|-------------------|

## 9. Executive Summary
Provide 4-5 bullet points summarizing the most critical findings.

IMPORTANT:
- Fill every table with real data from the posts above. If data is limited for a section, note that explicitly but still provide what you can.
- Use actual Reddit quotes where possible (in quotation marks).
- Be direct and actionable — this report goes to decision makers.
- If no data is found for the brand specifically, focus on the competitive and market landscape."#
    )
}

fn render_post(out: &mut String, number: usize, post: &Post, limits: &PipelineLimits) {
    out.push_str(&format!("\n--- Post {number} [{}] ---\n", post.priority));
    out.push_str(&format!("Subreddit: r/{}\n", post.subreddit));
    out.push_str(&format!("Title: {}\n", post.title));
    out.push_str(&format!(
        "Score: {} | Comments: {}\n",
        post.score, post.num_comments
    ));

    if !post.permalink.is_empty() {
        out.push_str(&format!("URL: {}\n", canonical_url(&post.permalink)));
    }

    let snippet: String = post
        .selftext
        .chars()
        .take(limits.prompt_body_max_chars)
        .collect();
    if !snippet.is_empty() {
        out.push_str(&format!("Text: {snippet}\n"));
    }

    if !post.comments.is_empty() {
        out.push_str("Top Comments:\n");
        for (index, comment) in post
            .comments
            .iter()
            .take(limits.prompt_comments_per_post)
            .enumerate()
        {
            let body: String = comment
                .body
                .chars()
                .take(limits.prompt_comment_max_chars)
                .collect();
            out.push_str(&format!(
                "  {}. [{} pts] u/{}: {body}\n",
                index + 1,
                comment.score,
                comment.author
            ));
        }
    }
}

/// Prefixes relative permalinks with the Reddit host; absolute URLs pass
/// through untouched.
fn canonical_url(permalink: &str) -> String {
    if permalink.starts_with("http") {
        permalink.to_string()
    } else {
        format!("{REDDIT_HOST}{permalink}")
    }
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Comment, Priority};

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: "Acme support is great".to_string(),
            selftext: "Long story short, their team is responsive.".to_string(),
            subreddit: "smallbusiness".to_string(),
            score: 42,
            num_comments: 7,
            permalink: "/r/smallbusiness/comments/abc/acme/".to_string(),
            matched_query: "Acme".to_string(),
            priority: Priority::Urgent,
            comments: Vec::new(),
        }
    }

    fn comment(body: &str, score: i64) -> Comment {
        Comment {
            author: "redditor".to_string(),
            body: body.to_string(),
            score,
        }
    }

    fn request() -> AnalyzeRequest {
        AnalyzeRequest {
            brand: "Acme".to_string(),
            competitors: vec!["Rival".to_string()],
            keywords: vec!["crm".to_string()],
            ..AnalyzeRequest::default()
        }
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        let limits = PipelineLimits::default();
        let posts = vec![post("a"), post("b")];
        let first = build_analysis_prompt("Acme", &request(), &posts, &limits);
        let second = build_analysis_prompt("Acme", &request(), &posts, &limits);
        assert_eq!(first, second);
    }

    #[test]
    fn all_nine_sections_are_present_with_table_headers() {
        let limits = PipelineLimits::default();
        let prompt = build_analysis_prompt("Acme", &request(), &[post("a")], &limits);

        for heading in [
            "## 1. Brand Perception",
            "## 2. Competitive Landscape",
            "## 3. Market Insights",
            "## 4. Pain Points & Opportunities",
            "## 5. Recommendation Patterns",
            "## 6. Key Threats",
            "## 7. Actionable Recommendations",
            "## 8. Quote Bank",
            "## 9. Executive Summary",
        ] {
            assert!(prompt.contains(heading), "missing section: {heading}");
        }
        assert!(prompt.contains("| Sentiment | Quote | Subreddit | Context |"));
        assert!(prompt.contains("| Quote | Source (Subreddit/User) | Strategic Insight |"));
    }

    #[test]
    fn context_lines_render_lists_or_none() {
        let limits = PipelineLimits::default();
        let prompt = build_analysis_prompt("Acme", &request(), &[post("a")], &limits);
        assert!(prompt.contains("BRAND: Acme"));
        assert!(prompt.contains("ALIASES: none"));
        assert!(prompt.contains("COMPETITORS: Rival"));
        assert!(prompt.contains("KEYWORDS: crm"));
    }

    #[test]
    fn post_block_carries_priority_tag_and_counts() {
        let limits = PipelineLimits::default();
        let prompt = build_analysis_prompt("Acme", &request(), &[post("a")], &limits);
        assert!(prompt.contains("--- Post 1 [URGENT] ---"));
        assert!(prompt.contains("Subreddit: r/smallbusiness"));
        assert!(prompt.contains("Score: 42 | Comments: 7"));
    }

    #[test]
    fn relative_permalink_is_prefixed_with_host() {
        let limits = PipelineLimits::default();
        let prompt = build_analysis_prompt("Acme", &request(), &[post("a")], &limits);
        assert!(prompt.contains("URL: https://reddit.com/r/smallbusiness/comments/abc/acme/"));
    }

    #[test]
    fn absolute_permalink_passes_through() {
        let mut p = post("a");
        p.permalink = "https://www.reddit.com/r/x/comments/abc/".to_string();
        let limits = PipelineLimits::default();
        let prompt = build_analysis_prompt("Acme", &request(), &[p], &limits);
        assert!(prompt.contains("URL: https://www.reddit.com/r/x/comments/abc/"));
    }

    #[test]
    fn body_text_is_truncated_to_budget() {
        let limits = PipelineLimits::default();
        let mut p = post("a");
        p.selftext = format!("{}OVERFLOW", "x".repeat(limits.prompt_body_max_chars));
        let prompt = build_analysis_prompt("Acme", &request(), &[p], &limits);
        assert!(!prompt.contains("OVERFLOW"));
    }

    #[test]
    fn at_most_ten_comments_render_per_post() {
        let limits = PipelineLimits::default();
        let mut p = post("a");
        p.comments = (0..12).map(|i| comment(&format!("comment-{i}"), i)).collect();
        let prompt = build_analysis_prompt("Acme", &request(), &[p], &limits);
        assert!(prompt.contains("comment-9"));
        assert!(!prompt.contains("comment-10"));
        assert!(!prompt.contains("comment-11"));
    }

    #[test]
    fn comment_bodies_are_truncated_to_budget() {
        let limits = PipelineLimits::default();
        let mut p = post("a");
        p.comments = vec![comment(
            &format!("{}TAIL", "y".repeat(limits.prompt_comment_max_chars)),
            3,
        )];
        let prompt = build_analysis_prompt("Acme", &request(), &[p], &limits);
        assert!(!prompt.contains("TAIL"));
    }

    #[test]
    fn post_without_body_or_comments_omits_those_lines() {
        let limits = PipelineLimits::default();
        let mut p = post("a");
        p.selftext = String::new();
        let prompt = build_analysis_prompt("Acme", &request(), &[p], &limits);
        assert!(!prompt.contains("\nText: \n"));
        assert!(!prompt.contains("Top Comments:"));
    }
}
