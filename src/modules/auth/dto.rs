use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct CallbackQuery {
    pub code: String,
    pub state: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginUrlResponse {
    pub authorize_url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}
