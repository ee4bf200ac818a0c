//! Messages for engine changes, worded after GraphQL Inspector's.

use graphql_schema_diff::ChangeKind;

/// Human-readable message for an engine change.
#[must_use]
pub fn describe(kind: ChangeKind, path: &str, detail: &str) -> String {
    use ChangeKind as K;

    let (parent, member) = split_member(path);
    let detail = detail.trim();

    match kind {
        K::ChangeQueryType => format!("Schema query root type was changed to '{detail}'"),
        K::ChangeMutationType => format!("Schema mutation root type was changed to '{detail}'"),
        K::ChangeSubscriptionType => {
            format!("Schema subscription root type was changed to '{detail}'")
        }
        K::AddObjectType => format!("Type '{path}' was added"),
        K::RemoveObjectType => format!("Type '{path}' was removed"),
        K::AddInterfaceImplementation => {
            format!("'{parent}' object implements '{member}' interface")
        }
        K::RemoveInterfaceImplementation => {
            format!("'{parent}' object no longer implements '{member}' interface")
        }
        K::AddField => format!("Field '{path}' was added"),
        K::RemoveField => format!("Field '{path}' was removed"),
        K::ChangeFieldType => format!("Field '{path}' changed type to '{detail}'"),
        K::AddUnion => format!("Union '{path}' was added"),
        K::RemoveUnion => format!("Union '{path}' was removed"),
        K::AddUnionMember => format!("Member '{member}' was added to Union type '{parent}'"),
        K::RemoveUnionMember => {
            format!("Member '{member}' was removed from Union type '{parent}'")
        }
        K::AddEnum => format!("Enum '{path}' was added"),
        K::RemoveEnum => format!("Enum '{path}' was removed"),
        K::AddEnumValue => format!("Enum value '{member}' was added to enum '{parent}'"),
        K::RemoveEnumValue => format!("Enum value '{member}' was removed from enum '{parent}'"),
        K::AddScalar => format!("Scalar '{path}' was added"),
        K::RemoveScalar => format!("Scalar '{path}' was removed"),
        K::AddInterface => format!("Interface '{path}' was added"),
        K::RemoveInterface => format!("Interface '{path}' was removed"),
        K::AddDirectiveDefinition => format!("Directive '{path}' was added"),
        K::RemoveDirectiveDefinition => format!("Directive '{path}' was removed"),
        K::AddSchemaDefinition => "Schema definition was added".to_string(),
        K::RemoveSchemaDefinition => "Schema definition was removed".to_string(),
        K::AddSchemaExtension => "Schema extension was added".to_string(),
        K::RemoveSchemaExtension => "Schema extension was removed".to_string(),
        K::AddInputObject => format!("Input object type '{path}' was added"),
        K::RemoveInputObject => format!("Input object type '{path}' was removed"),
        K::AddFieldArgument => format!("Argument '{member}' was added to field '{parent}'"),
        K::RemoveFieldArgument => format!("Argument '{member}' was removed from field '{parent}'"),
        K::AddFieldArgumentDefault => {
            format!("Default value '{detail}' was added to argument '{path}'")
        }
        K::RemoveFieldArgumentDefault => format!("Default value was removed from argument '{path}'"),
        K::ChangeFieldArgumentDefault => {
            format!("Default value for argument '{path}' changed to '{detail}'")
        }
        K::ChangeFieldArgumentType => format!("Argument '{path}' changed type to '{detail}'"),
        K::AddDirective => format!("Directive '{member}' was added to '{parent}'"),
        K::RemoveDirective => format!("Directive '{member}' was removed from '{parent}'"),
        K::ChangeDescription => format!("Description of '{path}' changed"),
    }
}

/// Split `Parent.member` at the last dot; a path without a dot is all parent.
///
/// Interface implementations are keyed as `Type.&Interface`, directive uses
/// as `Type.@name[index]`.
fn split_member(path: &str) -> (&str, &str) {
    path.rsplit_once('.').map_or((path, ""), |(parent, member)| {
        let member = member.trim_start_matches('&');
        (parent, member.split_once('[').map_or(member, |(name, _)| name))
    })
}
