use crate::schema::SchemaIndexBuildError;
use crate::types::FieldDefinition;
use crate::types::TypeAnnotation;
use crate::types::TypeDescriptor;
use crate::types::TypeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaIndexBuildError>;

/// Utility for assembling a [`TypeDescriptor`] field by field.
#[derive(Clone, Debug)]
pub struct TypeDescriptorBuilder {
    fields: IndexMap<String, FieldDefinition>,
    kind: TypeKind,
    name: String,
}
impl TypeDescriptorBuilder {
    pub fn new(name: impl AsRef<str>, kind: TypeKind) -> Self {
        Self {
            fields: IndexMap::new(),
            kind,
            name: name.as_ref().to_string(),
        }
    }

    pub fn add_field(
        mut self,
        field_name: impl AsRef<str>,
        type_annotation: TypeAnnotation,
    ) -> Result<Self> {
        self.insert_field(FieldDefinition::new(field_name, type_annotation))?;
        Ok(self)
    }

    pub(crate) fn insert_field(&mut self, field: FieldDefinition) -> Result<()> {
        if self.fields.contains_key(field.name()) {
            return Err(SchemaIndexBuildError::DuplicateFieldDefinition {
                field_name: field.name().to_string(),
                type_name: self.name.to_owned(),
            });
        }
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            fields: self.fields,
            kind: self.kind,
            name: self.name,
        }
    }
}
impl std::convert::From<TypeDescriptor> for TypeDescriptorBuilder {
    fn from(value: TypeDescriptor) -> Self {
        Self {
            fields: value.fields,
            kind: value.kind,
            name: value.name,
        }
    }
}
