//! Check-run API abstraction.
//!
//! The reporter and the orchestrator talk to the check-run API through the
//! [`CheckRunClient`] trait so they can run without a GitHub connection.
//! The real implementation lives in the inspector-github crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::annotation::Annotation;
use crate::conclusion::Conclusion;
use crate::error::Result;

/// Identifier of a check run on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckRunId(pub u64);

impl fmt::Display for CheckRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Waiting to start
    Queued,
    /// Running
    InProgress,
    /// Finished; a conclusion is required
    Completed,
}

/// The `output` object of a check-run update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutput {
    /// Title shown above the summary
    pub title: String,
    /// Markdown summary
    pub summary: String,
    /// Annotations carried by this call; omitted entirely on the finalize call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
}

/// Partial payload for one check-run update call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRunUpdate {
    /// New status, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    /// Completion timestamp, sent together with `status = completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Final conclusion, sent together with `status = completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conclusion: Option<Conclusion>,
    /// Output block
    pub output: CheckOutput,
}

impl CheckRunUpdate {
    /// Complete the check run with a conclusion, title and summary but no annotations.
    #[must_use]
    pub fn finalize(
        conclusion: Conclusion,
        title: impl Into<String>,
        summary: impl Into<String>,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status: Some(CheckStatus::Completed),
            completed_at: Some(completed_at),
            conclusion: Some(conclusion),
            output: CheckOutput {
                title: title.into(),
                summary: summary.into(),
                annotations: None,
            },
        }
    }

    /// Attach one batch of annotations, repeating title and summary.
    #[must_use]
    pub fn annotate(
        title: impl Into<String>,
        summary: impl Into<String>,
        annotations: &[Annotation],
    ) -> Self {
        Self {
            status: None,
            completed_at: None,
            conclusion: None,
            output: CheckOutput {
                title: title.into(),
                summary: summary.into(),
                annotations: Some(annotations.to_vec()),
            },
        }
    }

    /// Number of annotations carried by this update
    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.output.annotations.as_ref().map_or(0, Vec::len)
    }

    /// Whether this is a finalize call (it sets the conclusion)
    #[must_use]
    pub const fn is_finalize(&self) -> bool {
        self.conclusion.is_some()
    }
}

/// Operations against the check-run API.
///
/// The repository a client targets is fixed at construction; implementations
/// never read it from ambient state.
#[async_trait]
pub trait CheckRunClient: Send + Sync {
    /// Create an in-progress check run on `head_sha` and return its ID.
    async fn create_check_run(&self, name: &str, head_sha: &str) -> Result<CheckRunId>;

    /// Apply a partial update to an existing check run.
    async fn update_check_run(&self, id: CheckRunId, update: &CheckRunUpdate) -> Result<()>;
}
