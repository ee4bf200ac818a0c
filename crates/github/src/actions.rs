//! Workflow commands and step outputs.

use inspector_core::{ActionOutput, Error, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Writes step outputs to the `$GITHUB_OUTPUT` file.
///
/// Without an output file (e.g. running outside Actions) values are only logged.
#[derive(Debug, Clone, Default)]
pub struct GitHubOutput {
    path: Option<PathBuf>,
}

impl GitHubOutput {
    /// Create an output writer for the given file.
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl ActionOutput for GitHubOutput {
    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        debug!(name, value, "Setting output");

        let Some(path) = &self.path else {
            return Ok(());
        };

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io(e, format!("opening {}", path.display())))?;

        let written = if value.contains('\n') {
            let delimiter = format!("ghadelimiter_{name}");
            writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")
        } else {
            writeln!(file, "{name}={value}")
        };
        written.map_err(|e| Error::io(e, format!("writing output '{name}'")))
    }
}

/// Format an `::error::` workflow command, which marks the step as failed in the log.
#[must_use]
pub fn error_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
