use crate::common::response::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tower_cookies::Cookies;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "session_id";

pub async fn auth_middleware(
    State(state): State<AppState>,
    cookies: Cookies,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // 1. Extract the session id from the cookie
    let session_id = cookies
        .get(SESSION_COOKIE)
        .and_then(|cookie| Uuid::parse_str(cookie.value()).ok());

    let session_id = match session_id {
        Some(id) => id,
        None => {
            return Err(ApiError(
                "Unauthorized: missing session cookie".to_string(),
                StatusCode::UNAUTHORIZED,
            ));
        }
    };

    // 2. Look the session up in the in-memory store
    let session = state.sessions.get(&session_id).ok_or_else(|| {
        ApiError(
            "Unauthorized: session expired or unknown".to_string(),
            StatusCode::UNAUTHORIZED,
        )
    })?;

    // 3. Inject the session into request extensions
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::AppConfig;
    use crate::infrastructure::github::oauth::GitHubUser;
    use axum::{Router, middleware, routing::get};
    use tower_cookies::CookieManagerLayer;

    fn test_state() -> AppState {
        let config = AppConfig {
            server_port: 0,
            github_client_id: "id".to_string(),
            github_client_secret: "secret".to_string(),
            redirect_uri: "http://localhost/callback".to_string(),
            oauth_state: "state".to_string(),
            repo_owner: "octo".to_string(),
            repo_name: "recorder".to_string(),
            github_api_url: "http://127.0.0.1:1".to_string(),
            github_oauth_url: "http://127.0.0.1:1".to_string(),
            workflow_name: "Download M3U8 Stream".to_string(),
            dispatch_event: "download-m3u8".to_string(),
        };
        AppState::new(config).unwrap()
    }

    async fn spawn_protected(state: AppState) -> String {
        let app = Router::new()
            .route("/protected", get(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .layer(CookieManagerLayer::new())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/protected")
    }

    #[tokio::test]
    async fn missing_cookie_is_unauthorized() {
        let url = spawn_protected(test_state()).await;

        let response = reqwest::get(&url).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_session_id_is_unauthorized() {
        let url = spawn_protected(test_state()).await;

        let response = reqwest::Client::new()
            .get(&url)
            .header("Cookie", format!("{}={}", SESSION_COOKIE, Uuid::new_v4()))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_session_id_is_unauthorized() {
        let url = spawn_protected(test_state()).await;

        let response = reqwest::Client::new()
            .get(&url)
            .header("Cookie", format!("{SESSION_COOKIE}=not-a-uuid"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn known_session_passes_through() {
        let state = test_state();
        let session = state.sessions.create(
            "gho_abc".to_string(),
            GitHubUser {
                login: "octocat".to_string(),
                name: None,
                avatar_url: None,
            },
        );
        let url = spawn_protected(state).await;

        let response = reqwest::Client::new()
            .get(&url)
            .header("Cookie", format!("{}={}", SESSION_COOKIE, session.id))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "ok");
    }
}
