//! Error types for the inspector-core crate

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for schema inspection runs
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Missing or malformed configuration (action inputs, CI environment)
    #[error("Configuration error: {message}")]
    #[diagnostic(code(inspector::config::invalid))]
    Configuration {
        /// The error message describing the configuration issue
        message: String,
        /// Optional hint for fixing the configuration
        #[help]
        help: Option<String>,
    },

    /// A schema source could not be fetched
    #[error("Failed to load schema: {message}")]
    #[diagnostic(code(inspector::schema::load))]
    Load {
        /// What failed to load and why
        message: String,
    },

    /// The diff engine rejected one of the schemas
    #[error("Failed to compare schemas: {message}")]
    #[diagnostic(code(inspector::schema::diff))]
    Diff {
        /// The error message reported by the diff engine
        message: String,
    },

    /// A call against the check-run API failed
    #[error("Check run API error: {message}")]
    #[diagnostic(code(inspector::check_run::api))]
    CheckRun {
        /// The error message describing the failed call
        message: String,
    },

    /// Annotation delivery failed after the check run was finalized
    #[error("Failed to send annotations: {message}")]
    #[diagnostic(
        code(inspector::check_run::annotations),
        help("The check run conclusion was already recorded; some annotations may be missing")
    )]
    Annotations {
        /// The underlying transport failure
        message: String,
    },

    /// I/O error with context
    #[error("I/O error during {operation}: {source}")]
    #[diagnostic(code(inspector::io::error))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Description of the operation that failed
        operation: String,
    },
}

impl Error {
    /// Create a configuration error with a message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            help: None,
        }
    }

    /// Create a configuration error with a message and help text
    pub fn configuration_with_help(message: impl Into<String>, help: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            help: Some(help.into()),
        }
    }

    /// Create a schema load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }

    /// Create a diff engine error
    pub fn diff(message: impl Into<String>) -> Self {
        Self::Diff {
            message: message.into(),
        }
    }

    /// Create a check-run API error
    pub fn check_run(message: impl Into<String>) -> Self {
        Self::CheckRun {
            message: message.into(),
        }
    }

    /// Create an annotation delivery error
    pub fn annotations(message: impl Into<String>) -> Self {
        Self::Annotations {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(source: std::io::Error, operation: impl Into<String>) -> Self {
        Self::Io {
            source,
            operation: operation.into(),
        }
    }

    /// Whether this error came from configuration rather than from the run itself
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Result type for inspector operations
pub type Result<T> = std::result::Result<T, Error>;
