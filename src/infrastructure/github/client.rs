use crate::config::settings::AppConfig;
use reqwest::{StatusCode, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

/// Upper bound on how many runs a single listing fetches.
const RUNS_PER_PAGE: u32 = 30;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("GitHub responded {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// A workflow run as GitHub reports it. The status vocabulary
/// (`queued`, `in_progress`, `completed`, ...) is owned by GitHub and
/// passed through without interpretation.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowRun {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub conclusion: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub path: String,
}

#[derive(Debug, Deserialize)]
struct WorkflowRunsPage {
    workflow_runs: Vec<WorkflowRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub archive_download_url: String,
}

#[derive(Debug, Deserialize)]
struct ArtifactsPage {
    artifacts: Vec<Artifact>,
}

/// Stateless wrapper around the three GitHub REST calls this service
/// makes: trigger a repository-dispatch event, list workflow runs, list
/// artifacts of a run. Constructed per request with the session's token.
pub struct DispatchClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl DispatchClient {
    pub fn new(http: reqwest::Client, config: &AppConfig, token: &str) -> Self {
        Self {
            http,
            base_url: format!(
                "{}/repos/{}/{}",
                config.github_api_url, config.repo_owner, config.repo_name
            ),
            token: token.to_string(),
        }
    }

    /// Send a repository-dispatch event. GitHub answers 204 on success;
    /// any non-2xx is propagated, no retry.
    pub async fn trigger<P: Serialize>(
        &self,
        event_type: &str,
        client_payload: &P,
    ) -> Result<(), DispatchError> {
        let body = serde_json::json!({
            "event_type": event_type,
            "client_payload": client_payload,
        });

        let response = self
            .http
            .post(format!("{}/dispatches", self.base_url))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .json(&body)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Recent workflow runs, most recent first, one bounded page.
    pub async fn list_runs(&self) -> Result<Vec<WorkflowRun>, DispatchError> {
        let response = self
            .http
            .get(format!("{}/actions/runs", self.base_url))
            .query(&[("per_page", RUNS_PER_PAGE)])
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let page: WorkflowRunsPage = Self::ensure_success(response).await?.json().await?;
        Ok(page.workflow_runs)
    }

    /// Artifacts of a single run. Only meaningful once the run is completed.
    pub async fn list_artifacts(&self, run_id: u64) -> Result<Vec<Artifact>, DispatchError> {
        let response = self
            .http
            .get(format!("{}/actions/runs/{}/artifacts", self.base_url, run_id))
            .bearer_auth(&self.token)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let page: ArtifactsPage = Self::ensure_success(response).await?.json().await?;
        Ok(page.artifacts)
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DispatchError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(DispatchError::Status { status, body })
        }
    }
}
