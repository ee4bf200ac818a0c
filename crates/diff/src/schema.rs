//! Facts about the parsed new schema that classification depends on.

use std::collections::HashSet;

use cynic_parser::TypeSystemDocument;
use cynic_parser::type_system::{Definition, InputValueDefinition, TypeDefinition};

/// Input object names and required input values of a schema, keyed the way
/// the engine writes change paths (`Type.field`, `Type.field.argument`).
///
/// An input value is required when its type is non-null and it has no
/// default value.
#[derive(Debug, Default)]
pub struct SchemaIndex {
    input_objects: HashSet<String>,
    required: HashSet<String>,
}

impl SchemaIndex {
    /// Index every type definition and extension of `document`.
    #[must_use]
    pub fn new(document: &TypeSystemDocument) -> Self {
        let mut index = Self::default();

        for definition in document.definitions() {
            let (Definition::Type(ty) | Definition::TypeExtension(ty)) = definition else {
                continue;
            };

            match ty {
                TypeDefinition::InputObject(input) => {
                    index.input_objects.insert(input.name().to_owned());
                    for field in input.fields() {
                        index.record(format!("{}.{}", input.name(), field.name()), &field);
                    }
                }
                TypeDefinition::Object(object) => {
                    for field in object.fields() {
                        for argument in field.arguments() {
                            let path = format!("{}.{}.{}", object.name(), field.name(), argument.name());
                            index.record(path, &argument);
                        }
                    }
                }
                TypeDefinition::Interface(iface) => {
                    for field in iface.fields() {
                        for argument in field.arguments() {
                            let path = format!("{}.{}.{}", iface.name(), field.name(), argument.name());
                            index.record(path, &argument);
                        }
                    }
                }
                TypeDefinition::Scalar(_) | TypeDefinition::Union(_) | TypeDefinition::Enum(_) => {}
            }
        }

        index
    }

    fn record(&mut self, path: String, value: &InputValueDefinition<'_>) {
        if value.ty().is_non_null() && value.default_value().is_none() {
            self.required.insert(path);
        }
    }

    /// Whether the type at the head of `path` is an input object.
    #[must_use]
    pub fn parent_is_input_object(&self, path: &str) -> bool {
        path.split('.')
            .next()
            .is_some_and(|parent| self.input_objects.contains(strip_index(parent)))
    }

    /// Whether the input value at `path` is non-null without a default.
    #[must_use]
    pub fn is_required(&self, path: &str) -> bool {
        let normalized = path.split('.').map(strip_index).collect::<Vec<_>>().join(".");
        self.required.contains(&normalized)
    }
}

/// Drop the extension index from a path segment: `Query[2]` becomes `Query`.
fn strip_index(segment: &str) -> &str {
    segment.split_once('[').map_or(segment, |(name, _)| name)
}
