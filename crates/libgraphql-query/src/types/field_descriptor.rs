use crate::schema::SchemaIndex;
use crate::schema::SchemaLookupError;
use crate::types::TypeKind;
use crate::types::TypeSchema;

type Result<T> = std::result::Result<T, SchemaLookupError>;

/// Everything a query builder needs to know about a field selected on a
/// given parent type: what it points at, whether it is a list or a
/// cursor connection, and the schema of its target.
///
/// Descriptors are derived on demand via [`FieldDescriptor::resolve()`] and
/// are never cached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldDescriptor<'schema> {
    pub(super) field_name: String,
    pub(super) is_connection: bool,
    pub(super) is_list: bool,
    pub(super) kind: TypeKind,
    pub(super) schema: TypeSchema<'schema>,
    pub(super) type_name: String,
}
impl<'schema> FieldDescriptor<'schema> {
    /// Describe the field named `field_name` on the `parent_type_name` type.
    ///
    /// Fails with [`SchemaLookupError::UnknownType`] if either the parent
    /// type or the field's target type is missing from the schema, and with
    /// [`SchemaLookupError::UnknownField`] if the parent type declares no
    /// such field.
    pub fn resolve(
        schema: &'schema SchemaIndex,
        field_name: &str,
        parent_type_name: &str,
    ) -> Result<Self> {
        let parent_type = schema.lookup(parent_type_name)?;
        let field = parent_type.field(field_name).ok_or_else(||
            SchemaLookupError::UnknownField {
                field_name: field_name.to_string(),
                parent_type_name: parent_type_name.to_string(),
            }
        )?;

        let type_annotation = field.type_annotation();
        let type_name = type_annotation.innermost_type_name();
        let target_type = schema.lookup(type_name)?;
        let kind = target_type.kind();
        let is_list = type_annotation.is_list();
        let is_connection = !is_list && schema.is_connection_type(target_type);

        log::trace!(
            "Resolved `{parent_type_name}.{field_name}` as `{type_annotation}` \
            (kind: {kind}, list: {is_list}, connection: {is_connection})."
        );

        Ok(Self {
            field_name: field_name.to_string(),
            is_connection,
            is_list,
            kind,
            schema: TypeSchema::for_type(target_type),
            type_name: type_name.to_string(),
        })
    }

    pub fn field_name(&self) -> &str {
        self.field_name.as_str()
    }

    /// Indicates whether the field's target type is a cursor connection
    /// according to the schema's
    /// [`ConnectionConvention`](crate::schema::ConnectionConvention).
    pub fn is_connection(&self) -> bool {
        self.is_connection
    }

    pub fn is_list(&self) -> bool {
        self.is_list
    }

    /// The kind of the field's target type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn schema(&self) -> &TypeSchema<'schema> {
        &self.schema
    }

    pub(crate) fn into_schema(self) -> TypeSchema<'schema> {
        self.schema
    }

    /// The name of the field's (innermost) target type.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
