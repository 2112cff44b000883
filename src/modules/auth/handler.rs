use super::dto::{CallbackQuery, LoginUrlResponse, UserResponse};
use super::service::AuthService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::infrastructure::session::store::Session;
use crate::middleware::auth::SESSION_COOKIE;
use crate::state::AppState;
use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_cookies::{Cookie, Cookies};

/// Get the GitHub authorize URL to start the OAuth flow
#[utoipa::path(
    get,
    path = "/api/v1/auth/login",
    responses(
        (status = 200, description = "Authorize URL", body = ApiResponse<LoginUrlResponse>)
    ),
    tag = "Auth"
)]
pub async fn login(State(state): State<AppState>) -> impl IntoResponse {
    ApiSuccess(
        ApiResponse::success(AuthService::login_url(state), "Redirect the user to this URL"),
        StatusCode::OK,
    )
    .into_response()
}

/// OAuth callback: exchange the code and open a session
#[utoipa::path(
    get,
    path = "/api/v1/auth/callback",
    params(CallbackQuery),
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Auth"
)]
pub async fn callback(
    State(state): State<AppState>,
    cookies: Cookies,
    Query(query): Query<CallbackQuery>,
) -> impl IntoResponse {
    match AuthService::complete_login(state, query).await {
        Ok(session) => {
            let mut cookie = Cookie::new(SESSION_COOKIE, session.id.to_string());
            cookie.set_http_only(true);
            cookie.set_path("/");
            cookies.add(cookie);

            ApiSuccess(
                ApiResponse::success(AuthService::user_response(&session), "Login successful"),
                StatusCode::OK,
            )
            .into_response()
        }
        Err(e) => ApiError(e.to_string(), StatusCode::UNAUTHORIZED).into_response(),
    }
}

/// Current logged-in user
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    responses(
        (status = 200, description = "Current user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn get_me(Extension(session): Extension<Session>) -> impl IntoResponse {
    ApiSuccess(
        ApiResponse::success(AuthService::user_response(&session), "Current user"),
        StatusCode::OK,
    )
    .into_response()
}

/// Discard the session
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<String>),
        (status = 401, description = "Unauthorized")
    ),
    security(("session_cookie" = [])),
    tag = "Auth"
)]
pub async fn logout(
    State(state): State<AppState>,
    cookies: Cookies,
    Extension(session): Extension<Session>,
) -> impl IntoResponse {
    AuthService::logout(state, session.id);

    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookies.remove(cookie);

    ApiSuccess(
        ApiResponse::success("logged_out".to_string(), "Logged out successfully"),
        StatusCode::OK,
    )
    .into_response()
}
