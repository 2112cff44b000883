use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

use crate::infrastructure::github::client::{Artifact, WorkflowRun};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordRequest {
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Record as an ongoing live stream. Only honored for YouTube URLs.
    #[serde(default)]
    pub live: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TriggerResponse {
    pub triggered: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArtifactResponse {
    pub name: String,
    pub download_url: String,
}

impl From<Artifact> for ArtifactResponse {
    fn from(artifact: Artifact) -> Self {
        Self {
            name: artifact.name,
            download_url: artifact.archive_download_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RunResponse {
    pub id: u64,
    pub name: String,
    /// Remote-owned vocabulary, displayed as-is.
    pub status: String,
    pub conclusion: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub path: String,
    /// Present only for completed runs whose artifact listing succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ArtifactResponse>>,
}

impl RunResponse {
    pub fn from_run(run: WorkflowRun, artifacts: Option<Vec<ArtifactResponse>>) -> Self {
        Self {
            id: run.id,
            name: run.name,
            status: run.status,
            conclusion: run.conclusion,
            created_at: run.created_at,
            path: run.path,
            artifacts,
        }
    }
}
