//! Impact levels for engine change kinds.

use graphql_schema_diff::ChangeKind;
use inspector_core::Criticality;

use crate::schema::SchemaIndex;

/// Classify one engine change at `path`, looking up added input values in
/// the new `schema`.
#[must_use]
pub fn criticality(kind: ChangeKind, path: &str, schema: &SchemaIndex) -> Criticality {
    use ChangeKind as K;

    match kind {
        K::ChangeQueryType
        | K::ChangeMutationType
        | K::ChangeSubscriptionType
        | K::RemoveObjectType
        | K::RemoveInterfaceImplementation
        | K::ChangeFieldType
        | K::RemoveField
        | K::RemoveUnion
        | K::RemoveUnionMember
        | K::RemoveEnum
        | K::RemoveEnumValue
        | K::RemoveScalar
        | K::RemoveInterface
        | K::RemoveDirectiveDefinition
        | K::RemoveSchemaDefinition
        | K::RemoveSchemaExtension
        | K::RemoveInputObject
        | K::RemoveFieldArgument
        | K::ChangeFieldArgumentType => Criticality::Breaking,

        K::AddInterfaceImplementation
        | K::AddUnionMember
        | K::AddEnumValue
        | K::AddFieldArgumentDefault
        | K::RemoveFieldArgumentDefault
        | K::ChangeFieldArgumentDefault
        | K::AddSchemaExtension
        | K::AddDirective
        | K::RemoveDirective => Criticality::Dangerous,

        K::AddFieldArgument if schema.is_required(path) => Criticality::Breaking,
        K::AddFieldArgument => Criticality::Dangerous,

        K::AddField if schema.parent_is_input_object(path) && schema.is_required(path) => {
            Criticality::Breaking
        }

        K::AddField
        | K::AddObjectType
        | K::AddUnion
        | K::AddEnum
        | K::AddScalar
        | K::AddInterface
        | K::AddDirectiveDefinition
        | K::AddSchemaDefinition
        | K::AddInputObject
        | K::ChangeDescription => Criticality::Safe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(sdl: &str) -> SchemaIndex {
        SchemaIndex::new(&cynic_parser::parse_type_system_document(sdl).unwrap())
    }

    #[test]
    fn test_removals_are_breaking() {
        let schema = SchemaIndex::default();
        for kind in [
            ChangeKind::RemoveField,
            ChangeKind::RemoveObjectType,
            ChangeKind::RemoveEnumValue,
            ChangeKind::RemoveUnionMember,
            ChangeKind::RemoveFieldArgument,
        ] {
            assert_eq!(criticality(kind, "Query.a", &schema), Criticality::Breaking, "{kind:?}");
        }
    }

    #[test]
    fn test_type_changes_are_breaking() {
        let schema = SchemaIndex::default();
        assert_eq!(
            criticality(ChangeKind::ChangeFieldType, "User.age", &schema),
            Criticality::Breaking
        );
        assert_eq!(
            criticality(ChangeKind::ChangeFieldArgumentType, "Query.user.id", &schema),
            Criticality::Breaking
        );
    }

    #[test]
    fn test_widening_additions_are_dangerous() {
        let schema = SchemaIndex::default();
        assert_eq!(
            criticality(ChangeKind::AddEnumValue, "Role.ADMIN", &schema),
            Criticality::Dangerous
        );
        assert_eq!(
            criticality(ChangeKind::AddUnionMember, "Actor.Admin", &schema),
            Criticality::Dangerous
        );
    }

    #[test]
    fn test_new_argument_depends_on_nullability() {
        let schema = index("type Query { users(first: Int!, last: Int! = 10, after: String): [String] }");

        assert_eq!(
            criticality(ChangeKind::AddFieldArgument, "Query.users.first", &schema),
            Criticality::Breaking
        );
        assert_eq!(
            criticality(ChangeKind::AddFieldArgument, "Query.users.last", &schema),
            Criticality::Dangerous
        );
        assert_eq!(
            criticality(ChangeKind::AddFieldArgument, "Query.users.after", &schema),
            Criticality::Dangerous
        );
    }

    #[test]
    fn test_new_field_on_input_object() {
        let schema = index(
            "input UserInput { email: String!, nickname: String }\ntype User { email: String! }",
        );

        assert_eq!(
            criticality(ChangeKind::AddField, "UserInput.email", &schema),
            Criticality::Breaking
        );
        assert_eq!(
            criticality(ChangeKind::AddField, "UserInput.nickname", &schema),
            Criticality::Safe
        );
        assert_eq!(
            criticality(ChangeKind::AddField, "User.email", &schema),
            Criticality::Safe
        );
    }

    #[test]
    fn test_description_changes_are_safe() {
        assert_eq!(
            criticality(ChangeKind::ChangeDescription, "Query.a", &SchemaIndex::default()),
            Criticality::Safe
        );
    }
}
