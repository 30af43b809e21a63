mod analyze;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use redlens_claude::ClaudeClient;
use redlens_pipeline::PipelineLimits;
use redlens_pullpush::PullPushClient;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub search: PullPushClient,
    pub claude: ClaudeClient,
    pub limits: PipelineLimits,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze::analyze))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}
