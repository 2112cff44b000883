use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

pub mod classifier;
pub mod dto;
pub mod handler;
pub mod payload;
pub mod service;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(handler::trigger_recording))
        .route("/runs", get(handler::list_runs))
        .route("/runs/{run_id}/artifacts", get(handler::list_artifacts))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware,
        ))
}
