//! GraphQL Inspector GitHub Action.
//!
//! Wires the GitHub providers and the schema differ into the inspection run
//! from [`inspector_core`]. The binary only parses inputs, sets up tracing and
//! maps the result to an exit code.

pub mod cli;
pub mod config;
pub mod tracing;

use inspector_core::{Collaborators, RunOutcome};
use inspector_diff::GraphQlSchemaDiffer;
use inspector_github::{
    ActionContext, GitHubClient, GitHubOutput, GitHubSchemaLoader, current_commit_sha,
};
use ::tracing::debug;

use crate::cli::{Cli, CliError, EXIT_FAILED, EXIT_OK};
use crate::config::{build_run_config, github_token};

/// Run the action for already-parsed inputs.
///
/// Inputs and the runner context are validated before anything is sent to
/// GitHub, so configuration errors never leave a dangling check run.
///
/// # Errors
///
/// Returns [`CliError::Config`] for invalid inputs or runner environment and
/// [`CliError::Run`] when loading, diffing or reporting fails.
pub async fn execute(cli: &Cli) -> Result<RunOutcome, CliError> {
    let token = github_token(cli)?;
    let context = ActionContext::from_env()?;

    let commit_sha = resolve_commit_sha(&context.sha).await;

    let config = build_run_config(cli, &context, commit_sha)?;

    let github = GitHubClient::new(&token, context.repo.clone())?;
    let loader = GitHubSchemaLoader::new(github.clone());
    let differ = GraphQlSchemaDiffer::new();
    let outputs = GitHubOutput::new(context.output_path.clone());

    let deps = Collaborators {
        checks: &github,
        loader: &loader,
        differ: &differ,
        outputs: &outputs,
    };

    inspector_core::run(&config, &deps)
        .await
        .map_err(CliError::from)
}

/// Commit to report on: the git HEAD (or the head of a merge commit), else
/// `fallback`. Git runs on the blocking pool.
pub async fn resolve_commit_sha(fallback: &str) -> String {
    let head = tokio::task::spawn_blocking(current_commit_sha)
        .await
        .ok()
        .flatten();

    head.unwrap_or_else(|| {
        debug!("Could not resolve HEAD, using GITHUB_SHA");
        fallback.to_string()
    })
}

/// Exit code of a completed run
#[must_use]
pub const fn exit_code_for_outcome(outcome: &RunOutcome) -> i32 {
    if outcome.failed() { EXIT_FAILED } else { EXIT_OK }
}
