use crate::config::settings::AppConfig;
use crate::infrastructure::github::oauth::OAuthClient;
use crate::infrastructure::session::store::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
    pub oauth: OAuthClient,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stream-recorder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let oauth = OAuthClient::new(http.clone(), &config);

        Ok(Self {
            config,
            http,
            oauth,
            sessions: SessionStore::new(),
        })
    }
}
