use crate::modules::auth::dto::*;
use crate::modules::recordings::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::handler::login,
        crate::modules::auth::handler::callback,
        crate::modules::auth::handler::get_me,
        crate::modules::auth::handler::logout,
        crate::modules::recordings::handler::trigger_recording,
        crate::modules::recordings::handler::list_runs,
        crate::modules::recordings::handler::list_artifacts,
    ),
    components(
        schemas(
            LoginUrlResponse, UserResponse,
            RecordRequest, TriggerResponse, RunResponse, ArtifactResponse,
        )
    ),
    tags(
        (name = "Auth", description = "GitHub OAuth session endpoints"),
        (name = "Recordings", description = "Trigger and inspect recording workflows")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

use utoipa::Modify;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::middleware::auth::SESSION_COOKIE,
                ))),
            );
        }
    }
}
