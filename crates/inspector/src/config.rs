//! Turning action inputs and the runner context into a [`RunConfig`].

use inspector_core::{
    DEFAULT_APPROVE_LABEL, DEFAULT_CHECK_NAME, RunConfig, SchemaPointer, coerce,
};
use inspector_github::ActionContext;

use crate::cli::{Cli, CliError};

/// Treat missing, empty and whitespace-only inputs alike.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

/// The GitHub token input.
///
/// # Errors
///
/// Returns a configuration error when the token is missing.
pub fn github_token(cli: &Cli) -> Result<String, CliError> {
    non_empty(cli.github_token.as_ref())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::config_with_help(
                "Input required and not supplied: github-token",
                "Pass `github-token: ${{ secrets.GITHUB_TOKEN }}` to the action",
            )
        })
}

/// Build the run configuration.
///
/// `commit_sha` is the commit the check run is attached to; it differs from
/// `context.sha` on pull request merge commits.
///
/// # Errors
///
/// Returns a configuration error when the `schema` input is missing or malformed.
pub fn build_run_config(
    cli: &Cli,
    context: &ActionContext,
    commit_sha: String,
) -> Result<RunConfig, CliError> {
    let endpoint = non_empty(cli.endpoint.as_ref()).map(str::to_string);
    let schema = SchemaPointer::parse(
        non_empty(cli.schema.as_ref()).unwrap_or_default(),
        endpoint.is_some(),
    )?;

    Ok(RunConfig {
        check_name: non_empty(cli.name.as_ref())
            .unwrap_or(DEFAULT_CHECK_NAME)
            .to_string(),
        head_ref: context.sha.clone(),
        commit_sha,
        workspace: Some(context.workspace.clone()),
        schema,
        endpoint,
        experimental_merge: coerce(non_empty(cli.experimental_merge.as_ref()), Some(false)),
        annotations: coerce(non_empty(cli.annotations.as_ref()), None),
        fail_on_breaking: coerce(non_empty(cli.fail_on_breaking.as_ref()), None),
        approve_label: non_empty(cli.approve_label.as_ref())
            .unwrap_or(DEFAULT_APPROVE_LABEL)
            .to_string(),
        pull_request: context.pull_request.clone(),
    })
}
