//! Pipeline orchestration.

use redlens_claude::ClaudeClient;
use redlens_pullpush::PullPushClient;

use crate::dedup::dedup_posts;
use crate::enrich::attach_comments;
use crate::error::PipelineError;
use crate::priority::classify_posts;
use crate::prompt::build_analysis_prompt;
use crate::queries::build_search_queries;
use crate::rank::rank_posts;
use crate::relevance::filter_relevant;
use crate::search::collect_posts;
use crate::types::{AnalysisStats, AnalyzeRequest, PipelineLimits, PipelineOutcome};

/// Run the full aggregation-and-analysis pipeline for one request.
///
/// 1. Validate the request (no network before this passes).
/// 2. Generate up to 4 search queries.
/// 3. Search PullPush per query (plus scoped subreddit passes), collecting
///    per-call failures without aborting.
/// 4. Deduplicate by normalized submission id.
/// 5. Keep relevant posts, falling back to the full set when nothing matches.
/// 6. Classify priorities, then stable-rank by priority and engagement.
/// 7. Attach comment threads to the top posts (failures leave a post bare).
/// 8. Assemble the deterministic analysis prompt and generate the report.
///
/// # Errors
///
/// - [`PipelineError::InvalidRequest`] when validation fails.
/// - [`PipelineError::NoResults`] when every search call failed or returned
///   nothing.
/// - [`PipelineError::Generation`] when the report generation call fails.
pub async fn run_pipeline(
    search: &PullPushClient,
    generator: &ClaudeClient,
    limits: &PipelineLimits,
    request: &AnalyzeRequest,
) -> Result<PipelineOutcome, PipelineError> {
    request.validate()?;
    let brand = request.brand.trim();

    let queries = build_search_queries(
        brand,
        &request.competitors,
        &request.keywords,
        limits.max_queries,
    );
    tracing::debug!(brand = %brand, queries = queries.len(), "generated search queries");

    let (raw_posts, search_errors) =
        collect_posts(search, &queries, &request.subreddits, limits).await;
    if raw_posts.is_empty() {
        return Err(PipelineError::NoResults {
            errors: search_errors,
        });
    }

    let unique = dedup_posts(raw_posts);
    let posts_found = unique.len();

    let mut curated = filter_relevant(unique, brand, request);
    classify_posts(&mut curated, brand, request);
    rank_posts(&mut curated);

    attach_comments(search, &mut curated, limits).await;

    let prompt = build_analysis_prompt(brand, request, &curated, limits);
    let generation = generator.generate(&prompt).await?;

    let stats = AnalysisStats {
        posts_found,
        posts_analyzed: curated.len(),
        cost_estimate: generator.prices().estimate_cost(generation.usage),
    };

    tracing::info!(
        brand = %brand,
        posts_found = stats.posts_found,
        posts_analyzed = stats.posts_analyzed,
        cost_estimate = stats.cost_estimate,
        "pipeline complete"
    );

    Ok(PipelineOutcome {
        report: generation.text,
        stats,
    })
}
