mod api;
mod middleware;

use tracing_subscriber::EnvFilter;

use redlens_claude::ClaudeClient;
use redlens_pipeline::PipelineLimits;
use redlens_pullpush::PullPushClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = redlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

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

    let app = build_app(AppState {
        search,
        claude,
        limits: PipelineLimits::default(),
    });

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting redlens server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
