use super::classifier::UrlClass;
use serde::Serialize;

/// The `client_payload` of a repository-dispatch event. `name` and `email`
/// are omitted from the JSON entirely when not provided; downstream treats
/// key presence as "was explicitly given".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_youtube: bool,
    pub is_live: bool,
    pub is_twitter: bool,
}

impl JobRequest {
    /// Pure structural transform; no validation of name or email content.
    /// The live flag is only honored for YouTube URLs, so a stale checkbox
    /// can never leak into a non-YouTube request.
    pub fn build(
        url: String,
        name: Option<String>,
        email: Option<String>,
        live_requested: bool,
        class: UrlClass,
    ) -> Self {
        Self {
            url,
            name: name.filter(|s| !s.trim().is_empty()),
            email: email.filter(|s| !s.trim().is_empty()),
            is_youtube: class.is_youtube,
            is_live: class.is_youtube && live_requested,
            is_twitter: class.is_twitter,
        }
    }
}
