//! Check runs through the GitHub REST API.

use async_trait::async_trait;
use inspector_core::{
    Annotation, AnnotationLevel, CheckOutput, CheckRunClient, CheckRunId, CheckRunUpdate,
    CheckStatus, Conclusion, Error, Result,
};
use octocrab::Octocrab;
use octocrab::params::checks::{
    CheckRunConclusion, CheckRunOutput, CheckRunOutputAnnotation, CheckRunOutputAnnotationLevel,
    CheckRunStatus,
};
use tracing::{debug, info};

use crate::context::RepoRef;

/// Authenticated GitHub client scoped to one repository.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
    repo: RepoRef,
}

impl GitHubClient {
    /// Create a client authenticated with a personal or workflow token.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the token is empty or the HTTP
    /// client cannot be built.
    pub fn new(token: &str, repo: RepoRef) -> Result<Self> {
        if token.trim().is_empty() {
            return Err(Error::configuration_with_help(
                "GitHub token is not set or empty",
                "Pass `github-token: ${{ secrets.GITHUB_TOKEN }}` to the action",
            ));
        }

        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create GitHub client: {e}")))?;

        Ok(Self { octocrab, repo })
    }

    /// Repository this client operates on.
    #[must_use]
    pub const fn repo(&self) -> &RepoRef {
        &self.repo
    }

    pub(crate) const fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

const fn check_status(status: CheckStatus) -> CheckRunStatus {
    match status {
        CheckStatus::Queued => CheckRunStatus::Queued,
        CheckStatus::InProgress => CheckRunStatus::InProgress,
        CheckStatus::Completed => CheckRunStatus::Completed,
    }
}

const fn check_conclusion(conclusion: Conclusion) -> CheckRunConclusion {
    match conclusion {
        Conclusion::Success => CheckRunConclusion::Success,
        Conclusion::Failure => CheckRunConclusion::Failure,
        Conclusion::Neutral => CheckRunConclusion::Neutral,
        Conclusion::Cancelled => CheckRunConclusion::Cancelled,
        Conclusion::Skipped => CheckRunConclusion::Skipped,
        Conclusion::TimedOut => CheckRunConclusion::TimedOut,
        Conclusion::ActionRequired => CheckRunConclusion::ActionRequired,
        Conclusion::Stale => CheckRunConclusion::Stale,
    }
}

fn check_annotation(annotation: &Annotation) -> CheckRunOutputAnnotation {
    CheckRunOutputAnnotation {
        path: annotation.path.clone(),
        start_line: annotation.start_line,
        end_line: annotation.end_line,
        start_column: None,
        end_column: None,
        annotation_level: match annotation.annotation_level {
            AnnotationLevel::Notice => CheckRunOutputAnnotationLevel::Notice,
            AnnotationLevel::Warning => CheckRunOutputAnnotationLevel::Warning,
            AnnotationLevel::Failure => CheckRunOutputAnnotationLevel::Failure,
        },
        message: annotation.message.clone(),
        title: annotation.title.clone(),
        raw_details: None,
    }
}

fn check_output(output: &CheckOutput) -> CheckRunOutput {
    CheckRunOutput {
        title: output.title.clone(),
        summary: output.summary.clone(),
        text: None,
        annotations: output
            .annotations
            .iter()
            .flatten()
            .map(check_annotation)
            .collect(),
        images: vec![],
    }
}

#[async_trait]
impl CheckRunClient for GitHubClient {
    async fn create_check_run(&self, name: &str, head_sha: &str) -> Result<CheckRunId> {
        let check_run = self
            .octocrab
            .checks(&self.repo.owner, &self.repo.name)
            .create_check_run(name, head_sha)
            .status(CheckRunStatus::InProgress)
            .send()
            .await
            .map_err(|e| Error::check_run(format!("Failed to create check run: {e}")))?;

        let id = CheckRunId(check_run.id.0);
        info!(check_run_id = %id, name, head_sha, "Created check run");
        Ok(id)
    }

    async fn update_check_run(&self, id: CheckRunId, update: &CheckRunUpdate) -> Result<()> {
        let checks = self.octocrab.checks(&self.repo.owner, &self.repo.name);
        let mut request = checks
            .update_check_run(id.0.into())
            .output(check_output(&update.output));

        if let Some(status) = update.status {
            request = request.status(check_status(status));
        }
        if let Some(conclusion) = update.conclusion {
            request = request.conclusion(check_conclusion(conclusion));
        }
        if let Some(completed_at) = update.completed_at {
            request = request.completed_at(completed_at);
        }

        request
            .send()
            .await
            .map_err(|e| Error::check_run(format!("Failed to update check run {id}: {e}")))?;

        debug!(
            check_run_id = %id,
            conclusion = ?update.conclusion,
            annotations = update.annotation_count(),
            "Updated check run"
        );
        Ok(())
    }
}
