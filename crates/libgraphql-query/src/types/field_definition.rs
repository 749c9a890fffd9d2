use crate::types::TypeAnnotation;

/// A field declared on an object or interface [`TypeDescriptor`].
///
/// [`TypeDescriptor`]: crate::types::TypeDescriptor
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl FieldDefinition {
    pub fn new(name: impl AsRef<str>, type_annotation: TypeAnnotation) -> Self {
        Self {
            name: name.as_ref().to_string(),
            type_annotation,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
