//! Integration tests for input validation in the action entry point.
//!
//! Every case here fails before a GitHub client is used, so no network access
//! is needed.

use inspector::cli::{Cli, CliError, EXIT_CLI, exit_code_for};
use inspector::execute;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn runner_env(workspace: Option<&str>) -> [(&'static str, Option<&str>); 5] {
    [
        ("GITHUB_REPOSITORY", Some("acme/api")),
        ("GITHUB_SHA", Some("4f2a9c")),
        ("GITHUB_WORKSPACE", workspace),
        ("GITHUB_EVENT_PATH", None),
        ("GITHUB_OUTPUT", None),
    ]
}

#[test]
fn missing_token_is_a_configuration_error() {
    let cli = Cli {
        schema: Some("main:schema.graphql".to_string()),
        ..Cli::default()
    };

    let err = block_on(execute(&cli)).unwrap_err();

    assert!(matches!(err, CliError::Config { .. }));
    assert!(err.message().contains("github-token"));
    assert_eq!(exit_code_for(&err), EXIT_CLI);
}

#[test]
fn missing_workspace_is_a_configuration_error() {
    let cli = Cli {
        github_token: Some("token".to_string()),
        schema: Some("main:schema.graphql".to_string()),
        ..Cli::default()
    };

    temp_env::with_vars(runner_env(None), || {
        let err = block_on(execute(&cli)).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_CLI);
        assert!(err.message().contains("GITHUB_WORKSPACE"));
    });
}

#[test]
fn missing_schema_is_a_configuration_error() {
    let workspace = tempfile::tempdir().unwrap();
    let workspace_path = workspace.path().to_string_lossy().to_string();
    let cli = Cli {
        github_token: Some("token".to_string()),
        ..Cli::default()
    };

    temp_env::with_vars(runner_env(Some(workspace_path.as_str())), || {
        let err = block_on(execute(&cli)).unwrap_err();
        assert_eq!(exit_code_for(&err), EXIT_CLI);
        assert!(err.message().contains("Failed to find `schema` variable"));
    });
}

#[test]
fn schema_without_ref_is_rejected_without_endpoint() {
    let workspace = tempfile::tempdir().unwrap();
    let workspace_path = workspace.path().to_string_lossy().to_string();
    let cli = Cli {
        github_token: Some("token".to_string()),
        schema: Some("schema.graphql".to_string()),
        ..Cli::default()
    };

    temp_env::with_vars(runner_env(Some(workspace_path.as_str())), || {
        let err = block_on(execute(&cli)).unwrap_err();
        assert!(matches!(err, CliError::Config { help: Some(_), .. }));
    });
}
