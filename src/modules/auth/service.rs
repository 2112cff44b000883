use super::dto::{CallbackQuery, LoginUrlResponse, UserResponse};
use crate::infrastructure::session::store::Session;
use crate::state::AppState;
use anyhow::{Result, bail};
use uuid::Uuid;

pub struct AuthService;

impl AuthService {
    pub fn login_url(state: AppState) -> LoginUrlResponse {
        LoginUrlResponse {
            authorize_url: state.oauth.authorize_url(&state.config.oauth_state),
        }
    }

    /// Finish the OAuth flow: verify the anti-forgery state, exchange the
    /// code, fetch the user, and open a session. Any failure leaves the
    /// session unauthenticated.
    pub async fn complete_login(state: AppState, req: CallbackQuery) -> Result<Session> {
        if req.state != state.config.oauth_state {
            bail!("OAuth state mismatch");
        }

        let token = state.oauth.exchange_code(&req.code).await?;
        let user = state.oauth.fetch_user(&token).await?;

        Ok(state.sessions.create(token, user))
    }

    pub fn logout(state: AppState, session_id: Uuid) {
        state.sessions.remove(&session_id);
    }

    pub fn user_response(session: &Session) -> UserResponse {
        UserResponse {
            login: session.user.login.clone(),
            name: session.user.name.clone(),
            avatar_url: session.user.avatar_url.clone(),
        }
    }
}
