use crate::config::settings::AppConfig;
use anyhow::{Result, bail};
use reqwest::header;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// GitHub authorization-code flow. Builds the authorize URL, exchanges the
/// callback code for an access token, and fetches the user profile.
#[derive(Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    oauth_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl OAuthClient {
    pub fn new(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            oauth_url: config.github_oauth_url.clone(),
            api_url: config.github_api_url.clone(),
            client_id: config.github_client_id.clone(),
            client_secret: config.github_client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    pub fn authorize_url(&self, state: &str) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", "repo workflow")
            .append_pair("state", state)
            .finish();

        format!("{}/authorize?{}", self.oauth_url, query)
    }

    /// Exchange the callback code for an access token. GitHub reports a bad
    /// code with a 200 carrying an `error` field, so both the status and the
    /// body are checked.
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/access_token", self.oauth_url))
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("token exchange failed with status {}", response.status());
        }

        let token: TokenResponse = response.json().await?;
        match token.access_token {
            Some(access_token) => Ok(access_token),
            None => {
                let reason = token
                    .error_description
                    .or(token.error)
                    .unwrap_or_else(|| "no access token in response".to_string());
                bail!("token exchange rejected: {reason}");
            }
        }
    }

    pub async fn fetch_user(&self, token: &str) -> Result<GitHubUser> {
        let response = self
            .http
            .get(format!("{}/user", self.api_url))
            .bearer_auth(token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("fetching user failed with status {}", response.status());
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::post};

    fn test_client(base: &str) -> OAuthClient {
        OAuthClient {
            http: reqwest::Client::new(),
            oauth_url: base.to_string(),
            api_url: base.to_string(),
            client_id: "id123".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:3000/callback".to_string(),
        }
    }

    async fn spawn(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn authorize_url_carries_oauth_params() {
        let client = test_client("https://github.com/login/oauth");
        let url = client.authorize_url("xyz");

        assert!(url.starts_with("https://github.com/login/oauth/authorize?"));
        assert!(url.contains("client_id=id123"));
        assert!(url.contains("scope=repo+workflow"));
        assert!(url.contains("state=xyz"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback"));
    }

    #[tokio::test]
    async fn exchange_code_returns_token() {
        let router = Router::new().route(
            "/access_token",
            post(|| async { Json(serde_json::json!({ "access_token": "gho_abc" })) }),
        );
        let base = spawn(router).await;

        let token = test_client(&base).exchange_code("code1").await.unwrap();
        assert_eq!(token, "gho_abc");
    }

    #[tokio::test]
    async fn exchange_code_rejects_error_body() {
        // GitHub answers 200 with an error object for a bad code.
        let router = Router::new().route(
            "/access_token",
            post(|| async {
                Json(serde_json::json!({
                    "error": "bad_verification_code",
                    "error_description": "The code passed is incorrect or expired."
                }))
            }),
        );
        let base = spawn(router).await;

        let err = test_client(&base).exchange_code("stale").await.unwrap_err();
        assert!(err.to_string().contains("incorrect or expired"));
    }
}
