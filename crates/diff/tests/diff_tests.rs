//! Diffing real SDL documents through the engine adapter.

use inspector_core::{AnnotationLevel, Conclusion, Criticality, Error, SchemaDiffer, SchemaSource};
use inspector_diff::GraphQlSchemaDiffer;

fn diff(old: &str, new: &str) -> inspector_core::Result<inspector_core::SchemaDiff> {
    GraphQlSchemaDiffer::new().diff(
        "schema.graphql",
        &SchemaSource::new("master:schema.graphql", old),
        &SchemaSource::new("schema.graphql", new),
    )
}

#[test]
fn identical_schemas_have_no_changes() {
    let sdl = "type Query {\n  user(id: ID!): User\n}\n\ntype User {\n  id: ID!\n}\n";

    let result = diff(sdl, sdl).unwrap();

    assert!(result.changes.is_empty());
    assert!(result.annotations.is_empty());
    assert_eq!(result.conclusion, Conclusion::Success);
}

#[test]
fn removed_field_is_breaking() {
    let old = "type Query {\n  a: String\n  b: Int\n}\n";
    let new = "type Query {\n  a: String\n}\n";

    let result = diff(old, new).unwrap();

    assert_eq!(result.conclusion, Conclusion::Failure);
    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Query.b")
        .expect("removal of Query.b");
    assert_eq!(change.criticality, Criticality::Breaking);
    assert_eq!(change.message, "Field 'Query.b' was removed");

    let annotation = &result.annotations[0];
    assert_eq!(annotation.path, "schema.graphql");
    assert_eq!(annotation.annotation_level, AnnotationLevel::Failure);
    // removals carry no position in the new schema
    assert_eq!(annotation.start_line, 1);
    assert_eq!(annotation.end_line, 1);
}

#[test]
fn added_field_is_safe_and_points_at_its_line() {
    let old = "type Query {\n  a: String\n}\n";
    let new = "type Query {\n  a: String\n  c: Int\n}\n";

    let result = diff(old, new).unwrap();

    assert_eq!(result.conclusion, Conclusion::Success);
    assert_eq!(result.changes.len(), 1);
    assert_eq!(result.changes[0].criticality, Criticality::Safe);
    assert_eq!(result.changes[0].message, "Field 'Query.c' was added");

    let annotation = &result.annotations[0];
    assert_eq!(annotation.annotation_level, AnnotationLevel::Notice);
    assert_eq!(annotation.start_line, 3);
    assert_eq!(annotation.title.as_deref(), Some("Safe change"));
}

#[test]
fn required_argument_is_breaking() {
    let old = "type Query {\n  users: [String]\n}\n";
    let new = "type Query {\n  users(first: Int!): [String]\n}\n";

    let result = diff(old, new).unwrap();

    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Query.users.first")
        .expect("added argument");
    assert_eq!(change.criticality, Criticality::Breaking);
    assert_eq!(change.message, "Argument 'first' was added to field 'Query.users'");
    assert_eq!(result.conclusion, Conclusion::Failure);
}

#[test]
fn required_input_field_is_breaking() {
    let old = "type Query {\n  search(filter: Filter): [String]\n}\n\ninput Filter {\n  text: String\n}\n";
    let new = "type Query {\n  search(filter: Filter): [String]\n}\n\ninput Filter {\n  text: String\n  limit: Int!\n}\n";

    let result = diff(old, new).unwrap();

    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Filter.limit")
        .expect("added input field");
    assert_eq!(change.criticality, Criticality::Breaking);
}

#[test]
fn added_enum_value_is_dangerous() {
    let old = "type Query {\n  role: Role\n}\n\nenum Role {\n  USER\n}\n";
    let new = "type Query {\n  role: Role\n}\n\nenum Role {\n  USER\n  ADMIN\n}\n";

    let result = diff(old, new).unwrap();

    assert_eq!(result.conclusion, Conclusion::Success);
    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Role.ADMIN")
        .expect("added enum value");
    assert_eq!(change.criticality, Criticality::Dangerous);
    assert!(
        result
            .annotations
            .iter()
            .any(|a| a.annotation_level == AnnotationLevel::Warning)
    );
}

#[test]
fn every_change_gets_one_annotation() {
    let old = "type Query {\n  a: String\n  b: Int\n}\n\ntype Old {\n  id: ID\n}\n";
    let new = "type Query {\n  a: Int\n  c: Int\n}\n\ntype New {\n  id: ID\n}\n";

    let result = diff(old, new).unwrap();

    assert!(result.changes.len() >= 4);
    assert_eq!(result.changes.len(), result.annotations.len());
    for (change, annotation) in result.changes.iter().zip(&result.annotations) {
        assert_eq!(change.message, annotation.message);
    }
}

#[test]
fn unparsable_schema_is_a_diff_error() {
    let err = diff("type Query {\n  a: String\n}\n", "type Query {").unwrap_err();

    assert!(matches!(err, Error::Diff { .. }));
    assert!(err.to_string().contains("schema.graphql"));
}

#[test]
fn description_mentioning_input_does_not_make_an_object_an_input() {
    let old = "\"\"\"\nTakes input Filter values\n\"\"\"\ntype Query {\n  search: [Filter]\n}\n\ntype Filter {\n  a: Int\n}\n";
    let new = "\"\"\"\nTakes input Filter values\n\"\"\"\ntype Query {\n  search: [Filter]\n}\n\ntype Filter {\n  a: Int\n  b: Int!\n}\n";

    let result = diff(old, new).unwrap();

    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Filter.b")
        .expect("added object field");
    assert_eq!(change.criticality, Criticality::Safe);
    assert_eq!(result.conclusion, Conclusion::Success);
}

#[test]
fn described_required_input_field_is_breaking() {
    let old = "type Query {\n  search(filter: Filter): [String]\n}\n\ninput Filter {\n  text: String\n}\n";
    let new = "type Query {\n  search(filter: Filter): [String]\n}\n\ninput Filter {\n  text: String\n  \"page size, e.g. limit=10\"\n  limit: Int!\n}\n";

    let result = diff(old, new).unwrap();

    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Filter.limit")
        .expect("added input field");
    assert_eq!(change.criticality, Criticality::Breaking);
    assert_eq!(result.conclusion, Conclusion::Failure);
}

#[test]
fn described_required_argument_is_breaking() {
    let old = "type Query {\n  u: String\n}\n";
    let new = "type Query {\n  u(\"contact me@x\" id: ID!): String\n}\n";

    let result = diff(old, new).unwrap();

    let change = result
        .changes
        .iter()
        .find(|c| c.path == "Query.u.id")
        .expect("added argument");
    assert_eq!(change.criticality, Criticality::Breaking);
    assert_eq!(result.conclusion, Conclusion::Failure);
}
