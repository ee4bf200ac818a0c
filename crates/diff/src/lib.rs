//! GraphQL schema diffing for the inspector action.
//!
//! Wraps [`graphql_schema_diff`] and turns its structural changes into
//! classified [`Change`]s plus line-anchored [`Annotation`]s on the new
//! schema file.

mod classify;
mod describe;
mod location;
mod schema;

pub use classify::criticality;
pub use describe::describe;
pub use location::line_at;
pub use schema::SchemaIndex;

use cynic_parser::TypeSystemDocument;
use inspector_core::{
    Annotation, AnnotationLevel, Change, Conclusion, Criticality, Error, Result, SchemaDiff,
    SchemaDiffer, SchemaSource,
};
use tracing::debug;

/// [`SchemaDiffer`] backed by the graphql-schema-diff engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphQlSchemaDiffer;

impl GraphQlSchemaDiffer {
    /// Create a new differ.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl SchemaDiffer for GraphQlSchemaDiffer {
    fn diff(&self, path: &str, old: &SchemaSource, new: &SchemaSource) -> Result<SchemaDiff> {
        let old_document = parse(old)?;
        let new_document = parse(new)?;

        let raw = graphql_schema_diff::diff_asts(old_document.as_ref(), new_document.as_ref());
        let index = new_document
            .as_ref()
            .map(SchemaIndex::new)
            .unwrap_or_default();

        let mut changes = Vec::with_capacity(raw.len());
        let mut annotations = Vec::with_capacity(raw.len());

        for change in raw {
            let detail = span_text(&new.content, change.span.start, change.span.end);
            let level = criticality(change.kind, &change.path, &index);
            let message = describe(change.kind, &change.path, detail);
            let line = if change.span.start < change.span.end {
                line_at(&new.content, change.span.start)
            } else {
                1
            };

            annotations.push(
                Annotation::new(path, line, annotation_level(level), message.clone())
                    .with_title(format!("{} change", level.label())),
            );
            changes.push(Change::new(level, message, change.path));
        }

        let conclusion = if changes.iter().any(Change::is_breaking) {
            Conclusion::Failure
        } else {
            Conclusion::Success
        };

        debug!(
            changes = changes.len(),
            conclusion = %conclusion,
            "Compared schemas"
        );

        Ok(SchemaDiff {
            conclusion,
            changes,
            annotations,
        })
    }
}

/// Parse a schema source; a blank document is an absent schema.
fn parse(source: &SchemaSource) -> Result<Option<TypeSystemDocument>> {
    if source.content.trim().is_empty() {
        return Ok(None);
    }

    cynic_parser::parse_type_system_document(&source.content)
        .map(Some)
        .map_err(|err| Error::diff(format!("Failed to parse '{}': {err}", source.name)))
}

const fn annotation_level(criticality: Criticality) -> AnnotationLevel {
    match criticality {
        Criticality::Breaking => AnnotationLevel::Failure,
        Criticality::Dangerous => AnnotationLevel::Warning,
        Criticality::Safe => AnnotationLevel::Notice,
    }
}

/// Text covered by a span, or empty when the span is out of range.
fn span_text(source: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    source.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text_out_of_range() {
        assert_eq!(span_text("type Query", 0, 4), "type");
        assert_eq!(span_text("type Query", 0, 0), "");
        assert_eq!(span_text("type Query", 5, 50), "");
    }

    #[test]
    fn test_blank_source_parses_to_nothing() {
        assert!(parse(&SchemaSource::new("schema.graphql", "  \n")).unwrap().is_none());
    }

    #[test]
    fn test_parse_error_names_the_source() {
        let err = parse(&SchemaSource::new("main:schema.graphql", "type Query {")).err().unwrap();
        assert!(matches!(err, Error::Diff { .. }));
        assert!(err.to_string().contains("main:schema.graphql"));
    }

    #[test]
    fn test_levels() {
        assert_eq!(annotation_level(Criticality::Breaking), AnnotationLevel::Failure);
        assert_eq!(annotation_level(Criticality::Dangerous), AnnotationLevel::Warning);
        assert_eq!(annotation_level(Criticality::Safe), AnnotationLevel::Notice);
    }
}
