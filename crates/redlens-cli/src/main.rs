use clap::{Args, Parser, Subcommand};

use redlens_claude::ClaudeClient;
use redlens_pipeline::{run_pipeline, AnalyzeRequest, PipelineLimits};
use redlens_pullpush::PullPushClient;

#[derive(Debug, Parser)]
#[command(name = "redlens-cli")]
#[command(about = "Reddit brand intelligence command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run one brand analysis and print the report to stdout.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Brand name to analyze.
    #[arg(long)]
    brand: String,

    /// Alternate names for the brand (repeatable).
    #[arg(long = "alias")]
    aliases: Vec<String>,

    /// Competitor names (repeatable).
    #[arg(long = "competitor")]
    competitors: Vec<String>,

    /// Product or market keywords (repeatable).
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Target subreddits to scope searches to (repeatable).
    #[arg(long = "subreddit")]
    subreddits: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze(args) => analyze(args).await,
    }
}

async fn analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = redlens_core::load_app_config()?;

    let search = match config.pullpush_base_url.as_deref() {
        Some(url) => PullPushClient::with_base_url(config.search_timeout_secs, url)?,
        None => PullPushClient::new(config.search_timeout_secs)?,
    };
    let claude = match config.claude_base_url.as_deref() {
        Some(url) => ClaudeClient::with_base_url(
            &config.anthropic_api_key,
            &config.claude_model,
            config.claude_max_tokens,
            config.generate_timeout_secs,
            url,
        )?,
        None => ClaudeClient::new(
            &config.anthropic_api_key,
            &config.claude_model,
            config.claude_max_tokens,
            config.generate_timeout_secs,
        )?,
    };

    let request = AnalyzeRequest {
        brand: args.brand,
        aliases: args.aliases,
        competitors: args.competitors,
        keywords: args.keywords,
        subreddits: args.subreddits,
    };

    let outcome = run_pipeline(&search, &claude, &PipelineLimits::default(), &request).await?;

    tracing::info!(
        posts_found = outcome.stats.posts_found,
        posts_analyzed = outcome.stats.posts_analyzed,
        cost_estimate = outcome.stats.cost_estimate,
        "analysis complete"
    );
    println!("{}", outcome.report);

    Ok(())
}
