//! GitHub Actions runtime context.
//!
//! Everything the action learns from the runner environment: the repository,
//! the triggering commit, the workspace, and the pull request event payload.

use inspector_core::{Error, PullRequest, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// `owner/name` of a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Account or organization
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Split `owner/repo`. Anything other than exactly two non-empty parts is rejected.
#[must_use]
pub fn parse_repo(repo_str: &str) -> Option<RepoRef> {
    let parts: Vec<&str> = repo_str.trim().split('/').collect();
    match parts.as_slice() {
        [owner, name] if !owner.is_empty() && !name.is_empty() => Some(RepoRef {
            owner: (*owner).to_string(),
            name: (*name).to_string(),
        }),
        _ => None,
    }
}

/// Runner environment of a single action invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionContext {
    /// Repository the workflow runs in
    pub repo: RepoRef,
    /// `GITHUB_SHA`: the ref the new schema is read from
    pub sha: String,
    /// Checked-out workspace
    pub workspace: PathBuf,
    /// Pull request from the event payload, when the event has one
    pub pull_request: Option<PullRequest>,
    /// File that receives step outputs
    pub output_path: Option<PathBuf>,
}

impl ActionContext {
    /// Read the context from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `GITHUB_REPOSITORY`, `GITHUB_SHA`
    /// or `GITHUB_WORKSPACE` is missing or malformed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the context through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ActionContext::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repo_str = var("GITHUB_REPOSITORY").ok_or_else(|| {
            Error::configuration("GITHUB_REPOSITORY is missing")
        })?;
        let repo = parse_repo(&repo_str).ok_or_else(|| {
            Error::configuration_with_help(
                format!("Invalid GITHUB_REPOSITORY '{repo_str}'"),
                "Expected the form 'owner/repo'",
            )
        })?;

        let sha = var("GITHUB_SHA")
            .ok_or_else(|| Error::configuration("GITHUB_SHA is missing"))?;

        let workspace = var("GITHUB_WORKSPACE").map(PathBuf::from).ok_or_else(|| {
            Error::configuration("Failed to resolve workspace directory. GITHUB_WORKSPACE is missing")
        })?;

        let pull_request = var("GITHUB_EVENT_PATH").and_then(|path| read_pull_request(Path::new(&path)));

        debug!(
            repo = %repo,
            sha = %sha,
            workspace = %workspace.display(),
            pull_request = ?pull_request.as_ref().map(|pr| pr.number),
            "Loaded GitHub Actions context"
        );

        Ok(Self {
            repo,
            sha,
            workspace,
            pull_request,
            output_path: var("GITHUB_OUTPUT").map(PathBuf::from),
        })
    }
}

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
    base: Option<BranchPayload>,
    #[serde(default)]
    labels: Vec<LabelPayload>,
}

#[derive(Debug, Deserialize)]
struct BranchPayload {
    #[serde(rename = "ref")]
    git_ref: String,
}

#[derive(Debug, Deserialize)]
struct LabelPayload {
    name: String,
}

impl From<PullRequestPayload> for PullRequest {
    fn from(payload: PullRequestPayload) -> Self {
        Self {
            number: payload.number,
            base_ref: payload.base.map(|base| base.git_ref),
            labels: payload.labels.into_iter().map(|label| label.name).collect(),
        }
    }
}

/// Extract the pull request from an event payload.
///
/// # Errors
///
/// Returns an error when the payload is not valid JSON.
pub fn parse_pull_request(payload: &str) -> serde_json::Result<Option<PullRequest>> {
    let event: EventPayload = serde_json::from_str(payload)?;
    Ok(event.pull_request.map(PullRequest::from))
}

/// An unreadable payload is treated as "not a pull request".
fn read_pull_request(path: &Path) -> Option<PullRequest> {
    let payload = match std::fs::read_to_string(path) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read event payload");
            return None;
        }
    };

    match parse_pull_request(&payload) {
        Ok(pull_request) => pull_request,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse event payload");
            None
        }
    }
}
