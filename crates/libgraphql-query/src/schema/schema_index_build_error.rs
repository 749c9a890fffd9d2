use crate::types::TypeKind;
use std::sync::Arc;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum SchemaIndexBuildError {
    #[error("The `{type_name}` type declares the `{field_name}` field more than once.")]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
    },

    #[error("Multiple definitions of the `{type_name}` type were found.")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, but no such type is defined.")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type as `{extension_kind}`, but \
        it is declared as `{kind}`."
    )]
    InvalidExtensionType {
        extension_kind: TypeKind,
        kind: TypeKind,
        type_name: String,
    },

    #[error("Error parsing introspection JSON: {0}")]
    IntrospectionParseError(Arc<serde_json::Error>),

    #[error(
        "The type of the `{type_name}.{field_name}` field is malformed in the \
        introspection result: {reason}"
    )]
    MalformedIntrospectionTypeRef {
        field_name: String,
        reason: String,
        type_name: String,
    },

    #[error("The introspection result has no `__schema` object.")]
    MissingIntrospectionSchema,

    #[error(
        "`{type_name}` is not a valid type name. Names starting with `__` are \
        reserved for introspection."
    )]
    InvalidDunderPrefixedTypeName {
        type_name: String,
    },

    #[error("The root query type `{type_name}` is not defined in the schema.")]
    NoQueryTypeDefined {
        type_name: String,
    },

    #[error(
        "The root query type `{type_name}` must be an object type, but it is \
        declared as `{kind}`."
    )]
    QueryTypeNotAnObject {
        kind: TypeKind,
        type_name: String,
    },

    #[error("Error parsing schema SDL: {0}")]
    SchemaParseError(Arc<graphql_parser::schema::ParseError>),

    #[error(
        "The `{type_name}.{field_name}` field is declared with type \
        `{field_type_name}`, but no such type is defined."
    )]
    UndefinedFieldType {
        field_name: String,
        field_type_name: String,
        type_name: String,
    },
}
impl std::convert::From<graphql_parser::schema::ParseError> for SchemaIndexBuildError {
    fn from(value: graphql_parser::schema::ParseError) -> Self {
        Self::SchemaParseError(Arc::new(value))
    }
}
impl std::convert::From<serde_json::Error> for SchemaIndexBuildError {
    fn from(value: serde_json::Error) -> Self {
        Self::IntrospectionParseError(Arc::new(value))
    }
}
