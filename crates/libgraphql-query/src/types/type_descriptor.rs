use crate::types::FieldDefinition;
use crate::types::TypeDescriptorBuilder;
use crate::types::TypeKind;
use indexmap::IndexMap;

/// A named type registered in a [`SchemaIndex`](crate::schema::SchemaIndex)
/// along with the fields it declares (in declaration order).
///
/// Only object and interface types declare selectable fields; every other
/// kind has an empty `fields` map.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDescriptor {
    pub(super) fields: IndexMap<String, FieldDefinition>,
    pub(super) kind: TypeKind,
    pub(super) name: String,
}
impl TypeDescriptor {
    /// Convenience wrapper around [`TypeDescriptorBuilder::new()`].
    pub fn builder(name: impl AsRef<str>, kind: TypeKind) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder::new(name, kind)
    }

    /// A field-less descriptor of the given kind.
    pub fn leaf(name: impl AsRef<str>, kind: TypeKind) -> Self {
        Self {
            fields: IndexMap::new(),
            kind,
            name: name.as_ref().to_string(),
        }
    }

    pub fn field(&self, field_name: &str) -> Option<&FieldDefinition> {
        self.fields.get(field_name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldDefinition> {
        &self.fields
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
