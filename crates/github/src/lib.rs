//! GitHub provider implementations for the GraphQL Inspector action.
//!
//! This crate provides GitHub-specific implementations of:
//! - [`GitHubClient`] for creating and updating check runs
//! - [`GitHubSchemaLoader`] for fetching schemas from refs, the workspace and endpoints
//! - [`GitHubOutput`] for step outputs
//! - [`ActionContext`] for reading the runner environment

#![warn(missing_docs)]

pub mod actions;
pub mod checks;
pub mod context;
pub mod git;
pub mod introspection;
pub mod loader;

pub use actions::{GitHubOutput, error_command};
pub use checks::GitHubClient;
pub use context::{ActionContext, RepoRef, parse_repo};
pub use git::current_commit_sha;
pub use loader::GitHubSchemaLoader;
