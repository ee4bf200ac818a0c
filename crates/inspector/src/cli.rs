//! Action inputs, exit codes and the CLI error type.

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;

use crate::tracing::{LogLevel, TracingFormat};

/// Exit codes for the CLI application
pub const EXIT_OK: i32 = 0;
/// The run failed: breaking changes, a schema that could not be loaded, or a failed report
pub const EXIT_FAILED: i32 = 1;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;

/// CLI-specific error types with proper exit code mapping
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum CliError {
    /// Missing or invalid inputs (exit code 2)
    #[error("CLI/configuration error: {message}")]
    #[diagnostic(code(inspector::cli::config))]
    Config {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
    /// The inspection itself failed (exit code 1)
    #[error("{message}")]
    #[diagnostic(code(inspector::cli::run))]
    Run {
        /// The error message
        message: String,
        /// Optional help text
        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create a new configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: None,
        }
    }

    /// Create a new configuration error with help text
    #[must_use]
    pub fn config_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a new run error
    #[must_use]
    pub fn run(message: impl Into<String>) -> Self {
        Self::Run {
            message: message.into(),
            help: None,
        }
    }

    /// The bare message, without the category prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Config { message, .. } | Self::Run { message, .. } => message,
        }
    }
}

/// Convert `inspector_core::Error` to the matching `CliError` variant.
impl From<inspector_core::Error> for CliError {
    fn from(err: inspector_core::Error) -> Self {
        match err {
            // Extract just the message to avoid "configuration error: Configuration error:"
            inspector_core::Error::Configuration { message, help } => Self::Config { message, help },
            inspector_core::Error::Annotations { .. } => Self::Run {
                message: err.to_string(),
                help: Some(
                    "The check run conclusion was already recorded; some annotations may be missing"
                        .to_string(),
                ),
            },
            other => Self::run(other.to_string()),
        }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Config { .. } => EXIT_CLI,
        CliError::Run { .. } => EXIT_FAILED,
    }
}

/// Action inputs.
///
/// GitHub hands inputs to the action as `INPUT_<NAME>` environment variables
/// (upper-cased, hyphens kept); each one is also accepted as a flag. Flags
/// that GitHub treats as booleans are taken as raw strings and coerced later.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "graphql-inspector")]
#[command(about = "Report GraphQL schema changes as a GitHub check run")]
#[command(version)]
pub struct Cli {
    /// Token used for the check-run and repository APIs.
    #[arg(long = "github-token", env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Name of the check run.
    #[arg(long, env = "INPUT_NAME")]
    pub name: Option<String>,

    /// Schema pointer, `ref:path` (or just a path when `--endpoint` is set).
    #[arg(long, env = "INPUT_SCHEMA")]
    pub schema: Option<String>,

    /// Compare against the pull request merge commit instead of the checkout.
    #[arg(long = "experimental-merge", env = "INPUT_EXPERIMENTAL_MERGE")]
    pub experimental_merge: Option<String>,

    /// Attach annotations to the check run.
    #[arg(long, env = "INPUT_ANNOTATIONS")]
    pub annotations: Option<String>,

    /// Fail the check run when breaking changes are found.
    #[arg(long = "fail-on-breaking", env = "INPUT_FAIL-ON-BREAKING")]
    pub fail_on_breaking: Option<String>,

    /// Pull request label that approves breaking changes.
    #[arg(long = "approve-label", env = "INPUT_APPROVE-LABEL")]
    pub approve_label: Option<String>,

    /// Live GraphQL endpoint providing the base schema.
    #[arg(long, env = "INPUT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Log output format.
    #[arg(long = "log-format", default_value = "compact", value_enum)]
    pub log_format: TracingFormat,

    /// Logging verbosity level.
    #[arg(short = 'L', long, default_value = "info", value_enum)]
    pub level: LogLevel,
}

/// Parse the process arguments and environment.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
