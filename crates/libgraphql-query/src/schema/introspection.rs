//! Serde model for the subset of a GraphQL introspection result needed to
//! build a [`SchemaIndex`](crate::schema::SchemaIndex).

use crate::schema::SchemaIndexBuildError;
use crate::types::TypeAnnotation;
use crate::types::TypeKind;

type Result<T> = std::result::Result<T, SchemaIndexBuildError>;

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionResult {
    data: Option<IntrospectionData>,
    #[serde(rename = "__schema")]
    schema: Option<IntrospectionSchema>,
}
impl IntrospectionResult {
    /// Accept both the raw `{"data": {"__schema": ...}}` response shape and
    /// the bare `{"__schema": ...}` shape.
    pub(super) fn into_schema(self) -> Option<IntrospectionSchema> {
        self.schema.or(self.data.map(|data| data.schema))
    }
}

#[derive(Debug, serde::Deserialize)]
struct IntrospectionData {
    #[serde(rename = "__schema")]
    schema: IntrospectionSchema,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionSchema {
    #[serde(rename = "queryType")]
    pub(super) query_type: Option<IntrospectionNamedRef>,
    pub(super) types: Vec<IntrospectionType>,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionNamedRef {
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionType {
    #[serde(default)]
    pub(super) fields: Option<Vec<IntrospectionField>>,
    pub(super) kind: TypeKind,
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionField {
    pub(super) name: String,
    #[serde(rename = "type")]
    pub(super) type_ref: IntrospectionTypeRef,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct IntrospectionTypeRef {
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "ofType")]
    of_type: Option<Box<IntrospectionTypeRef>>,
}
impl IntrospectionTypeRef {
    pub(super) fn to_type_annotation(
        &self,
        type_name: &str,
        field_name: &str,
    ) -> Result<TypeAnnotation> {
        let malformed = |reason: &str| SchemaIndexBuildError::MalformedIntrospectionTypeRef {
            field_name: field_name.to_string(),
            reason: reason.to_string(),
            type_name: type_name.to_string(),
        };

        match self.kind.as_str() {
            "LIST" => {
                let inner = self.of_type.as_ref()
                    .ok_or_else(|| malformed("`LIST` type ref has no `ofType`"))?;
                Ok(inner.to_type_annotation(type_name, field_name)?.into_list())
            },

            "NON_NULL" => {
                let inner = self.of_type.as_ref()
                    .ok_or_else(|| malformed("`NON_NULL` type ref has no `ofType`"))?;
                if inner.kind == "NON_NULL" {
                    return Err(malformed("`NON_NULL` wraps another `NON_NULL`"));
                }
                Ok(inner.to_type_annotation(type_name, field_name)?.into_non_null())
            },

            _ => {
                let name = self.name.as_ref()
                    .ok_or_else(|| malformed("named type ref has no `name`"))?;
                Ok(TypeAnnotation::named(name))
            },
        }
    }
}
