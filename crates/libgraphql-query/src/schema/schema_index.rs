use crate::schema::ConnectionConvention;
use crate::schema::SchemaIndexBuilder;
use crate::schema::SchemaLookupError;
use crate::types::FieldDescriptor;
use crate::types::TypeDescriptor;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaLookupError>;

/// An immutable, read-only index of the types in a GraphQL schema.
///
/// Query building only ever reads from a [`SchemaIndex`], so a single index
/// can be shared by reference across any number of threads building
/// independent queries.
#[derive(Clone, Debug)]
pub struct SchemaIndex {
    pub(super) connection_convention: ConnectionConvention,
    pub(super) query_type_name: String,
    pub(super) types: HashMap<String, TypeDescriptor>,
}
impl SchemaIndex {
    /// Convenience wrapper around [`SchemaIndexBuilder::new()`].
    pub fn builder() -> SchemaIndexBuilder {
        SchemaIndexBuilder::new()
    }

    pub fn connection_convention(&self) -> &ConnectionConvention {
        &self.connection_convention
    }

    /// Convenience wrapper around [`FieldDescriptor::resolve()`].
    pub fn descriptor_for_field(
        &self,
        field_name: &str,
        parent_type_name: &str,
    ) -> Result<FieldDescriptor<'_>> {
        FieldDescriptor::resolve(self, field_name, parent_type_name)
    }

    pub fn get(&self, type_name: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_name)
    }

    pub fn is_connection_type(&self, type_: &TypeDescriptor) -> bool {
        self.connection_convention.is_connection(type_)
    }

    /// Look up the [`TypeDescriptor`] for `type_name`, failing with
    /// [`SchemaLookupError::UnknownType`] if the schema doesn't define it.
    pub fn lookup(&self, type_name: &str) -> Result<&TypeDescriptor> {
        self.types.get(type_name).ok_or_else(|| SchemaLookupError::UnknownType {
            type_name: type_name.to_string(),
        })
    }

    /// The root query [`TypeDescriptor`].
    pub fn query_type(&self) -> Result<&TypeDescriptor> {
        self.lookup(self.query_type_name.as_str())
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type_name.as_str()
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}
