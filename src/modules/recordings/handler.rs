use super::dto::{ArtifactResponse, RecordRequest, RunResponse, TriggerResponse};
use super::service::RecordingService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::infrastructure::session::store::Session;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

/// Dispatch a recording workflow for a stream URL
#[utoipa::path(
    post,
    path = "/api/v1/recordings",
    request_body = RecordRequest,
    responses(
        (status = 202, description = "Workflow dispatched", body = ApiResponse<TriggerResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Dispatch rejected by GitHub")
    ),
    security(("session_cookie" = [])),
    tag = "Recordings"
)]
pub async fn trigger_recording(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(payload): Json<RecordRequest>,
) -> impl IntoResponse {
    if let Err(e) = payload.validate() {
        return ApiError(e.to_string(), StatusCode::BAD_REQUEST).into_response();
    }

    match RecordingService::trigger(state, &session, payload).await {
        Ok(result) => ApiSuccess(
            ApiResponse::success(result, "Recording workflow started successfully"),
            StatusCode::ACCEPTED,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::BAD_GATEWAY).into_response(),
    }
}

/// List recent recording workflow runs
#[utoipa::path(
    get,
    path = "/api/v1/recordings/runs",
    responses(
        (status = 200, description = "Recent runs, most recent first", body = ApiResponse<Vec<RunResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Listing rejected by GitHub")
    ),
    security(("session_cookie" = [])),
    tag = "Recordings"
)]
pub async fn list_runs(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> impl IntoResponse {
    match RecordingService::list_runs(state, &session).await {
        Ok(runs) => ApiSuccess(
            ApiResponse::success(runs, "Runs retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::BAD_GATEWAY).into_response(),
    }
}

/// List artifacts of a completed run
#[utoipa::path(
    get,
    path = "/api/v1/recordings/runs/{run_id}/artifacts",
    params(
        ("run_id" = u64, Path, description = "Workflow run ID")
    ),
    responses(
        (status = 200, description = "Artifacts of the run", body = ApiResponse<Vec<ArtifactResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 502, description = "Listing rejected by GitHub")
    ),
    security(("session_cookie" = [])),
    tag = "Recordings"
)]
pub async fn list_artifacts(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(run_id): Path<u64>,
) -> impl IntoResponse {
    match RecordingService::list_artifacts(state, &session, run_id).await {
        Ok(artifacts) => ApiSuccess(
            ApiResponse::success(artifacts, "Artifacts retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => ApiError(e.to_string(), StatusCode::BAD_GATEWAY).into_response(),
    }
}
