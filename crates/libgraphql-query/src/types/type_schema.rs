use crate::types::TypeDescriptor;
use crate::types::TypeKind;

/// The type a [`SelectionSet`](crate::operation::SelectionSet) is scoped to.
///
/// Scalars carry no selectable fields, so they are represented by a
/// name-only marker rather than a full [`TypeDescriptor`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeSchema<'schema> {
    Scalar {
        name: String,
    },
    Type(&'schema TypeDescriptor),
}
impl<'schema> TypeSchema<'schema> {
    pub fn scalar(name: impl AsRef<str>) -> Self {
        Self::Scalar {
            name: name.as_ref().to_string(),
        }
    }

    /// Scope a selection set to `type_`, using the name-only marker when it
    /// is a scalar.
    pub fn for_type(type_: &'schema TypeDescriptor) -> Self {
        match type_.kind() {
            TypeKind::Scalar => Self::scalar(type_.name()),
            _ => Self::Type(type_),
        }
    }

    /// The full [`TypeDescriptor`], unless this is the scalar marker.
    pub fn as_type_descriptor(&self) -> Option<&'schema TypeDescriptor> {
        match self {
            Self::Scalar { .. } => None,
            Self::Type(type_) => Some(type_),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar { .. } => TypeKind::Scalar,
            Self::Type(type_) => type_.kind(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name } => name.as_str(),
            Self::Type(type_) => type_.name(),
        }
    }
}
