//! Diff engine abstraction.

use crate::annotation::Annotation;
use crate::change::Change;
use crate::conclusion::Conclusion;
use crate::error::Result;
use crate::source::SchemaSource;

/// Outcome of comparing two schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDiff {
    /// Raw conclusion, before any override
    pub conclusion: Conclusion,
    /// Every detected change
    pub changes: Vec<Change>,
    /// Annotations for the new schema file
    pub annotations: Vec<Annotation>,
}

impl SchemaDiff {
    /// A diff with no changes.
    #[must_use]
    pub const fn unchanged() -> Self {
        Self {
            conclusion: Conclusion::Success,
            changes: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

/// Compares two schema versions.
pub trait SchemaDiffer: Send + Sync {
    /// Compare `old` against `new`; `path` is the schema file annotations point at.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Diff`] when either schema cannot be parsed.
    fn diff(&self, path: &str, old: &SchemaSource, new: &SchemaSource) -> Result<SchemaDiff>;
}
