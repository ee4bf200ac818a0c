//! Check-run annotations.

use serde::{Deserialize, Serialize};

/// Severity of an annotation, as understood by the check-run API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    /// Informational
    Notice,
    /// Potentially harmful
    Warning,
    /// Blocking
    Failure,
}

/// One diagnostic attached to a check run's output.
///
/// Serializes to the annotation object expected by the GitHub check-run API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// File path relative to the repository root
    pub path: String,
    /// First line (1-based)
    pub start_line: u32,
    /// Last line (1-based)
    pub end_line: u32,
    /// Severity
    pub annotation_level: AnnotationLevel,
    /// Message shown inline
    pub message: String,
    /// Optional short title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Annotation {
    /// Create a single-line annotation.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        line: u32,
        level: AnnotationLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            start_line: line,
            end_line: line,
            annotation_level: level,
            message: message.into(),
            title: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
