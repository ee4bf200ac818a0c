//! The inspection run: load both schemas, diff them, report the check run.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::check::{CheckRunClient, CheckRunId};
use crate::conclusion::{Conclusion, resolve_conclusion};
use crate::diff::SchemaDiffer;
use crate::error::Result;
use crate::report::CheckRunReporter;
use crate::source::{SchemaLoader, SchemaLocation, SchemaPointer, SchemaSource};
use crate::summary::{SUMMARY_CHANGE_LIMIT, create_summary};

/// Default check run name.
pub const DEFAULT_CHECK_NAME: &str = "GraphQL Inspector";
/// Default label that approves breaking changes.
pub const DEFAULT_APPROVE_LABEL: &str = "approved-breaking-change";

const FAILURE_TITLE: &str = "Something is wrong with your schema";
const SUCCESS_TITLE: &str = "Everything looks good";
const INVALID_CONFIG_TITLE: &str = "Invalid config. Failed to add annotation";

/// The pull request that triggered the run, if any.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PullRequest {
    /// Pull request number
    pub number: u64,
    /// Base branch name
    pub base_ref: Option<String>,
    /// Names of applied labels
    pub labels: Vec<String>,
}

impl PullRequest {
    /// Whether a label with exactly this name is applied
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }

    /// Ref of the merge commit GitHub prepares for this pull request
    #[must_use]
    pub fn merge_ref(&self) -> String {
        format!("refs/pull/{}/merge", self.number)
    }
}

/// Everything a run needs, collected once from configuration and CI environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Check run name
    pub check_name: String,
    /// Ref the new schema is read from when no workspace is available
    pub head_ref: String,
    /// Commit the check run is attached to
    pub commit_sha: String,
    /// Checked-out workspace, if any
    pub workspace: Option<PathBuf>,
    /// Parsed `schema` input
    pub schema: SchemaPointer,
    /// Live endpoint providing the base schema
    pub endpoint: Option<String>,
    /// Compare against the pull request merge commit
    pub experimental_merge: bool,
    /// Send annotations
    pub annotations: bool,
    /// Fail the check on breaking changes
    pub fail_on_breaking: bool,
    /// Label that approves breaking changes
    pub approve_label: String,
    /// Triggering pull request
    pub pull_request: Option<PullRequest>,
}

/// Receives action outputs (e.g. `changes=3`).
pub trait ActionOutput: Send + Sync {
    /// Record an output value.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_output(&self, name: &str, value: &str) -> Result<()>;
}

/// External collaborators of a run.
pub struct Collaborators<'a> {
    /// Check-run API
    pub checks: &'a dyn CheckRunClient,
    /// Schema loader
    pub loader: &'a dyn SchemaLoader,
    /// Diff engine
    pub differ: &'a dyn SchemaDiffer,
    /// Action output sink
    pub outputs: &'a dyn ActionOutput,
}

/// Which schemas to load and how to name them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePlan {
    /// Path of the schema file in the repository
    pub path: String,
    /// Base schema
    pub old: SchemaLocation,
    /// Display name of the base schema
    pub old_name: String,
    /// Schema under test
    pub new: SchemaLocation,
    /// Display name of the schema under test
    pub new_name: String,
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Check run that was reported
    pub check_id: CheckRunId,
    /// Reported conclusion
    pub conclusion: Conclusion,
    /// Reported title
    pub title: String,
    /// Number of detected changes
    pub changes: usize,
    /// Number of annotations delivered
    pub annotations_sent: usize,
}

impl RunOutcome {
    /// Whether the process must end in a failed state
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.conclusion.is_failure()
    }
}

/// Decide where the base and new schemas are read from.
#[must_use]
pub fn plan_sources(config: &RunConfig) -> SourcePlan {
    let mut schema_ref = config.schema.git_ref.clone();
    let mut head_ref = config.head_ref.clone();
    let mut workspace = config.workspace.clone();

    if config.experimental_merge
        && let Some(pr) = &config.pull_request
    {
        head_ref = pr.merge_ref();
        workspace = None;
        info!("EXPERIMENTAL - Using Pull Request {head_ref}");

        if let Some(base_ref) = pr.base_ref.as_deref().filter(|r| !r.is_empty()) {
            schema_ref = base_ref.to_string();
            info!("EXPERIMENTAL - Using {base_ref} as base schema ref");
        }
    }

    let path = config.schema.path.clone();

    let (old, old_name) = match &config.endpoint {
        Some(url) => (SchemaLocation::Endpoint { url: url.clone() }, url.clone()),
        None => (
            SchemaLocation::Git {
                git_ref: schema_ref.clone(),
                path: path.clone(),
            },
            format!("{schema_ref}:{path}"),
        ),
    };

    let new = match workspace {
        Some(root) => SchemaLocation::Workspace {
            root,
            path: path.clone(),
        },
        None => SchemaLocation::Git {
            git_ref: head_ref,
            path: path.clone(),
        },
    };

    SourcePlan {
        new_name: path.clone(),
        path,
        old,
        old_name,
        new,
    }
}

/// Run the inspection and report it as a check run.
///
/// # Errors
///
/// Fails when the check run cannot be created, either schema cannot be loaded
/// or diffed, or the report cannot be delivered. A failing conclusion is not
/// an error; see [`RunOutcome::failed`].
pub async fn run(config: &RunConfig, deps: &Collaborators<'_>) -> Result<RunOutcome> {
    info!("GraphQL Inspector started");
    info!("Ref: {}", config.head_ref);
    info!("Commit SHA: {}", config.commit_sha);

    info!("Creating a check named \"{}\"", config.check_name);
    let check_id = deps
        .checks
        .create_check_run(&config.check_name, &config.commit_sha)
        .await?;
    info!(check_run_id = %check_id, "Check ID: {check_id}");

    let plan = plan_sources(config);

    let (old_text, new_text) =
        futures::try_join!(deps.loader.load(&plan.old), deps.loader.load(&plan.new))?;
    info!("Got both sources");

    let old = SchemaSource::new(plan.old_name, old_text);
    let new = SchemaSource::new(plan.new_name, new_text);

    info!("Start comparing schemas");
    let diff = deps.differ.diff(&plan.path, &old, &new)?;

    let change_count = diff.changes.len();
    deps.outputs.set_output("changes", &change_count.to_string())?;
    info!("Changes: {change_count}");

    let has_approval_label = config
        .pull_request
        .as_ref()
        .is_some_and(|pr| pr.has_label(&config.approve_label));

    let conclusion = resolve_conclusion(diff.conclusion, config.fail_on_breaking, has_approval_label);
    if conclusion != diff.conclusion {
        info!("FailOnBreaking disabled. Forcing SUCCESS");
    }

    let annotations = if config.annotations {
        diff.annotations
    } else {
        info!("Annotations are disabled. Skipping annotations...");
        Vec::new()
    };

    let summary = create_summary(&diff.changes, SUMMARY_CHANGE_LIMIT);
    let title = if conclusion.is_failure() {
        FAILURE_TITLE
    } else {
        SUCCESS_TITLE
    };

    info!("Conclusion: {conclusion}");

    let reporter = CheckRunReporter::new(deps.checks);
    match reporter
        .report(check_id, conclusion, title, &summary, &annotations)
        .await
    {
        Ok(outcome) => Ok(RunOutcome {
            check_id,
            conclusion: outcome.conclusion,
            title: title.to_string(),
            changes: change_count,
            annotations_sent: outcome.annotations_sent,
        }),
        Err(err) => {
            error!(error = %err, "Failed to report check run");

            if let Err(fallback) = reporter
                .report(
                    check_id,
                    Conclusion::Failure,
                    INVALID_CONFIG_TITLE,
                    INVALID_CONFIG_TITLE,
                    &[],
                )
                .await
            {
                warn!(error = %fallback, "Failed to mark check run as failed");
            }

            Err(err)
        }
    }
}
