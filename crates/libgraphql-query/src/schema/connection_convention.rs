use crate::types::TypeDescriptor;
use crate::types::TypeKind;
use std::sync::Arc;

/// Decides which object types are cursor connections (types exposing
/// `pageInfo` and `edges { cursor, node }`).
///
/// There is no protocol-level marker for connections, so each schema
/// provider picks a convention. The default matches object types whose
/// name ends in `Connection`.
#[derive(Clone)]
pub enum ConnectionConvention {
    /// Any caller-supplied predicate.
    Custom(Arc<dyn Fn(&TypeDescriptor) -> bool + Send + Sync>),

    /// Object types that declare both an `edges` and a `pageInfo` field.
    EdgesAndPageInfo,

    /// Object types whose name ends with the given suffix.
    TypeNameSuffix(String),
}
impl ConnectionConvention {
    pub fn custom(
        predicate: impl Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(Arc::new(predicate))
    }

    /// Non-object types are never connections.
    pub fn is_connection(&self, type_: &TypeDescriptor) -> bool {
        if type_.kind() != TypeKind::Object {
            return false;
        }

        match self {
            Self::Custom(predicate) => predicate(type_),
            Self::EdgesAndPageInfo =>
                type_.field("edges").is_some()
                    && type_.field("pageInfo").is_some(),
            Self::TypeNameSuffix(suffix) =>
                type_.name().len() > suffix.len()
                    && type_.name().ends_with(suffix.as_str()),
        }
    }
}
impl std::default::Default for ConnectionConvention {
    fn default() -> Self {
        Self::TypeNameSuffix("Connection".to_string())
    }
}
impl std::fmt::Debug for ConnectionConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(_) => f.write_str("Custom(..)"),
            Self::EdgesAndPageInfo => f.write_str("EdgesAndPageInfo"),
            Self::TypeNameSuffix(suffix) =>
                f.debug_tuple("TypeNameSuffix").field(suffix).finish(),
        }
    }
}
