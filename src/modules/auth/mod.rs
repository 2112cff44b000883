use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

pub mod dto;
pub mod handler;
pub mod service;

pub fn router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        .route("/login", get(handler::login))
        .route("/callback", get(handler::callback));

    let protected_routes = Router::new()
        .route("/me", get(handler::get_me))
        .route("/logout", post(handler::logout))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware,
        ));

    public_routes.merge(protected_routes)
}
