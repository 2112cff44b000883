use super::classifier;
use super::dto::{ArtifactResponse, RecordRequest, RunResponse, TriggerResponse};
use super::payload::JobRequest;
use crate::infrastructure::github::client::{DispatchClient, DispatchError};
use crate::infrastructure::session::store::Session;
use crate::state::AppState;
use tracing::{info, warn};

pub struct RecordingService;

impl RecordingService {
    /// Classify the URL, build the dispatch payload, and fire the workflow.
    /// Classification is recomputed on every submission; nothing carries
    /// over from earlier requests.
    pub async fn trigger(
        state: AppState,
        session: &Session,
        req: RecordRequest,
    ) -> Result<TriggerResponse, DispatchError> {
        let class = classifier::classify(&req.url);
        let payload = JobRequest::build(req.url, req.name, req.email, req.live, class);

        let client = DispatchClient::new(state.http.clone(), &state.config, &session.token);
        client.trigger(&state.config.dispatch_event, &payload).await?;

        info!(url = %payload.url, user = %session.user.login, "recording workflow dispatched");
        Ok(TriggerResponse { triggered: true })
    }

    /// Recent runs of the recording workflow. For completed runs the
    /// artifact list is fetched inline; a failure there is isolated to
    /// that run so the rest of the listing still renders.
    pub async fn list_runs(
        state: AppState,
        session: &Session,
    ) -> Result<Vec<RunResponse>, DispatchError> {
        let client = DispatchClient::new(state.http.clone(), &state.config, &session.token);
        let runs = client.list_runs().await?;

        let mut responses = Vec::new();
        for run in runs
            .into_iter()
            .filter(|run| run.name == state.config.workflow_name)
        {
            let artifacts = if run.status == "completed" {
                match client.list_artifacts(run.id).await {
                    Ok(artifacts) => {
                        Some(artifacts.into_iter().map(ArtifactResponse::from).collect())
                    }
                    Err(e) => {
                        warn!(run_id = run.id, error = %e, "artifact listing failed for run");
                        None
                    }
                }
            } else {
                None
            };

            responses.push(RunResponse::from_run(run, artifacts));
        }

        Ok(responses)
    }

    pub async fn list_artifacts(
        state: AppState,
        session: &Session,
        run_id: u64,
    ) -> Result<Vec<ArtifactResponse>, DispatchError> {
        let client = DispatchClient::new(state.http.clone(), &state.config, &session.token);
        let artifacts = client.list_artifacts(run_id).await?;

        Ok(artifacts.into_iter().map(ArtifactResponse::from).collect())
    }
}
