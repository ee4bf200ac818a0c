//! Schema loading from the repository, the workspace and live endpoints.

use async_trait::async_trait;
use inspector_core::{Error, Result, SchemaLoader, SchemaLocation};
use serde_json::json;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::checks::GitHubClient;
use crate::introspection::introspect;

/// [`SchemaLoader`] for the GitHub Actions runner.
///
/// Git locations are fetched as blobs through the GraphQL API, so the base
/// branch does not need to be present in the checkout.
pub struct GitHubSchemaLoader {
    github: GitHubClient,
    http: reqwest::Client,
}

impl GitHubSchemaLoader {
    /// Create a loader sharing the authenticated GitHub client.
    #[must_use]
    pub fn new(github: GitHubClient) -> Self {
        Self {
            github,
            http: reqwest::Client::new(),
        }
    }

    async fn load_git(&self, git_ref: &str, path: &str) -> Result<String> {
        let repo = self.github.repo();
        debug!(repo = %repo, git_ref, path, "Fetching schema blob");

        let failed = || Error::load(format!("Failed to load '{path}' (ref: {git_ref})"));

        let payload = json!({
            "query": BLOB_QUERY,
            "variables": {
                "owner": repo.owner,
                "repo": repo.name,
                "expression": format!("{git_ref}:{path}"),
            },
        });

        let response: serde_json::Value = self
            .github
            .octocrab()
            .graphql(&payload)
            .await
            .map_err(|e| {
                warn!(error = %e, "GraphQL blob request failed");
                failed()
            })?;

        extract_blob_text(&response).ok_or_else(failed)
    }
}

const BLOB_QUERY: &str = r"
query GetFile($repo: String!, $owner: String!, $expression: String!) {
  repository(name: $repo, owner: $owner) {
    object(expression: $expression) {
      ... on Blob {
        text
      }
    }
  }
}
";

/// Pull the blob text out of a `repository.object` response.
///
/// Accepts the full response envelope or its `data` member. A missing object,
/// a non-blob object or a binary blob (null text) all yield `None`.
#[must_use]
pub fn extract_blob_text(response: &serde_json::Value) -> Option<String> {
    response
        .pointer("/data/repository/object/text")
        .or_else(|| response.pointer("/repository/object/text"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
}

/// Read a schema file from the checked-out workspace.
///
/// # Errors
///
/// Returns a load error naming the file when it cannot be read.
pub async fn load_workspace_file(root: &Path, path: &str) -> Result<String> {
    let full = root.join(path);
    tokio::fs::read_to_string(&full)
        .await
        .map_err(|e| Error::load(format!("Failed to read '{}': {e}", full.display())))
}

#[async_trait]
impl SchemaLoader for GitHubSchemaLoader {
    async fn load(&self, location: &SchemaLocation) -> Result<String> {
        let sdl = match location {
            SchemaLocation::Git { git_ref, path } => self.load_git(git_ref, path).await?,
            SchemaLocation::Workspace { root, path } => load_workspace_file(root, path).await?,
            SchemaLocation::Endpoint { url } => introspect(&self.http, url).await?,
        };

        info!(source = %location, bytes = sdl.len(), "Loaded schema");
        Ok(sdl)
    }
}
