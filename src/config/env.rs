use std::env;
use std::str::FromStr;

pub enum EnvKey {
    ServerPort,
    GithubClientId,
    GithubClientSecret,
    RedirectUri,
    OauthState,
    RepoOwner,
    RepoName,
    GithubApiUrl,
    GithubOauthUrl,
    WorkflowName,
    DispatchEvent,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "APP_PORT",
            EnvKey::GithubClientId => "GITHUB_CLIENT_ID",
            EnvKey::GithubClientSecret => "GITHUB_CLIENT_SECRET",
            EnvKey::RedirectUri => "REDIRECT_URI",
            EnvKey::OauthState => "OAUTH_STATE",
            EnvKey::RepoOwner => "GITHUB_REPO_OWNER",
            EnvKey::RepoName => "GITHUB_REPO_NAME",
            EnvKey::GithubApiUrl => "GITHUB_API_URL",
            EnvKey::GithubOauthUrl => "GITHUB_OAUTH_URL",
            EnvKey::WorkflowName => "GITHUB_WORKFLOW_NAME",
            EnvKey::DispatchEvent => "GITHUB_DISPATCH_EVENT",
        }
    }
}

pub fn get(key: EnvKey) -> Result<String, env::VarError> {
    env::var(key.as_str())
}

pub fn get_or(key: EnvKey, default: &str) -> String {
    env::var(key.as_str()).unwrap_or_else(|_| default.to_string())
}

pub fn get_parsed<T: FromStr>(key: EnvKey, default: T) -> T {
    match get(key) {
        Ok(val) => val.parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
