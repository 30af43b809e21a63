use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Serialize;

use redlens_pipeline::{run_pipeline, AnalysisStats, AnalyzeRequest, PipelineError};

use crate::middleware::RequestId;

use super::AppState;

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeSuccess {
    pub report: String,
    pub stats: AnalysisStats,
}

#[derive(Debug, Serialize)]
pub(super) struct ErrorBody {
    pub error: String,
}

pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Response {
    match run_pipeline(&state.search, &state.claude, &state.limits, &request).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(AnalyzeSuccess {
                report: outcome.report,
                stats: outcome.stats,
            }),
        )
            .into_response(),
        Err(error) => {
            tracing::warn!(request_id = %req_id.0, error = %error, "analysis failed");
            (
                error_status(&error),
                Json(ErrorBody {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}

fn error_status(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::InvalidRequest(_) | PipelineError::NoResults { .. } => {
            StatusCode::BAD_REQUEST
        }
        PipelineError::Generation(_) => StatusCode::BAD_GATEWAY,
    }
}
