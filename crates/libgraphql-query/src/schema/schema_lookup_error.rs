use thiserror::Error;

/// Raised when a query references a type or field the schema doesn't
/// define. Query building stops at the first such reference.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SchemaLookupError {
    #[error(
        "Attempted to select a field named `{field_name}` on the \
        `{parent_type_name}` type, but `{parent_type_name}` has no such field \
        defined."
    )]
    UnknownField {
        field_name: String,
        parent_type_name: String,
    },

    #[error("No type named `{type_name}` is defined in the schema.")]
    UnknownType {
        type_name: String,
    },
}
