//! Where schemas come from.

use async_trait::async_trait;
use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A place a schema can be loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaLocation {
    /// A file at a git ref in the repository being checked
    Git {
        /// Branch, tag, SHA or full ref
        git_ref: String,
        /// Path relative to the repository root
        path: String,
    },
    /// A file in the checked-out workspace
    Workspace {
        /// Workspace root directory
        root: PathBuf,
        /// Path relative to the workspace root
        path: String,
    },
    /// A live GraphQL endpoint, introspected and printed as SDL
    Endpoint {
        /// Endpoint URL
        url: String,
    },
}

impl fmt::Display for SchemaLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git { git_ref, path } => write!(f, "{git_ref}:{path}"),
            Self::Workspace { root, path } => write!(f, "{}", root.join(path).display()),
            Self::Endpoint { url } => f.write_str(url),
        }
    }
}

/// Schema text with the name used to refer to it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaSource {
    /// Display name (e.g. `main:schema.graphql` or an endpoint URL)
    pub name: String,
    /// SDL text
    pub content: String,
}

impl SchemaSource {
    /// Create a new named schema source.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Loads schema text from a [`SchemaLocation`].
#[async_trait]
pub trait SchemaLoader: Send + Sync {
    /// Fetch the schema text at `location`.
    async fn load(&self, location: &SchemaLocation) -> Result<String>;
}

/// The `schema` input: `ref:path`, or a bare path when an endpoint provides the base schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPointer {
    /// Ref of the base schema (empty when an endpoint is used)
    pub git_ref: String,
    /// Path of the schema file
    pub path: String,
}

impl SchemaPointer {
    /// Parse the `schema` input.
    ///
    /// With an endpoint the whole pointer is the path of the new schema.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the pointer is empty, or when it is
    /// not of the form `ref:path` and no endpoint is configured.
    pub fn parse(pointer: &str, has_endpoint: bool) -> Result<Self> {
        let pointer = pointer.trim();
        if pointer.is_empty() {
            return Err(Error::configuration("Failed to find `schema` variable"));
        }

        if has_endpoint {
            return Ok(Self {
                git_ref: String::new(),
                path: pointer.to_string(),
            });
        }

        match pointer.split_once(':') {
            Some((git_ref, path)) if !git_ref.is_empty() && !path.is_empty() => Ok(Self {
                git_ref: git_ref.to_string(),
                path: path.to_string(),
            }),
            _ => Err(Error::configuration_with_help(
                format!("Invalid `schema` value '{pointer}'"),
                "Use the form `ref:path`, e.g. `master:schema.graphql`",
            )),
        }
    }
}

impl fmt::Display for SchemaPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.git_ref.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}:{}", self.git_ref, self.path)
        }
    }
}
