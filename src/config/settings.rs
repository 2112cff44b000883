use crate::config::env::{self, EnvKey};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub github_client_id: String,
    pub github_client_secret: String,
    pub redirect_uri: String,
    pub oauth_state: String,
    pub repo_owner: String,
    pub repo_name: String,
    pub github_api_url: String,
    pub github_oauth_url: String,
    pub workflow_name: String,
    pub dispatch_event: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, std::env::VarError> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            github_client_id: env::get(EnvKey::GithubClientId)?,
            github_client_secret: env::get(EnvKey::GithubClientSecret)?,
            redirect_uri: env::get(EnvKey::RedirectUri)?,
            oauth_state: env::get(EnvKey::OauthState)?,
            repo_owner: env::get(EnvKey::RepoOwner)?,
            repo_name: env::get(EnvKey::RepoName)?,
            github_api_url: env::get_or(EnvKey::GithubApiUrl, "https://api.github.com"),
            github_oauth_url: env::get_or(EnvKey::GithubOauthUrl, "https://github.com/login/oauth"),
            workflow_name: env::get_or(EnvKey::WorkflowName, "Download M3U8 Stream"),
            dispatch_event: env::get_or(EnvKey::DispatchEvent, "download-m3u8"),
        })
    }
}
