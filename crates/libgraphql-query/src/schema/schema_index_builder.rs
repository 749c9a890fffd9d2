use crate::schema::ConnectionConvention;
use crate::schema::SchemaIndex;
use crate::schema::SchemaIndexBuildError;
use crate::schema::introspection::IntrospectionResult;
use crate::types::FieldDefinition;
use crate::types::TypeAnnotation;
use crate::types::TypeDescriptor;
use crate::types::TypeDescriptorBuilder;
use crate::types::TypeKind;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, SchemaIndexBuildError>;

const BUILTIN_SCALAR_NAMES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];
const DEFAULT_QUERY_TYPE_NAME: &str = "Query";

/// Utility for building a [`SchemaIndex`].
///
/// Types can be registered one at a time with [`add_type()`], or loaded in
/// bulk from SDL ([`load_sdl()`]) or from an introspection result
/// ([`load_introspection_json()`]). The built-in scalars are always
/// present.
///
/// [`add_type()`]: SchemaIndexBuilder::add_type
/// [`load_sdl()`]: SchemaIndexBuilder::load_sdl
/// [`load_introspection_json()`]: SchemaIndexBuilder::load_introspection_json
#[derive(Debug)]
pub struct SchemaIndexBuilder {
    connection_convention: ConnectionConvention,
    pending_extensions: Vec<PendingTypeExtension>,
    query_type_name: Option<String>,
    types: HashMap<String, TypeDescriptor>,
}
impl SchemaIndexBuilder {
    pub fn new() -> Self {
        Self {
            connection_convention: ConnectionConvention::default(),
            pending_extensions: vec![],
            query_type_name: None,
            types: BUILTIN_SCALAR_NAMES.iter()
                .map(|name| (
                    name.to_string(),
                    TypeDescriptor::leaf(name, TypeKind::Scalar),
                ))
                .collect(),
        }
    }

    pub fn add_type(mut self, type_: TypeDescriptor) -> Result<Self> {
        self.insert_type(type_)?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<SchemaIndex> {
        for extension in std::mem::take(&mut self.pending_extensions) {
            self.apply_extension(extension)?;
        }

        let query_type_name = self.query_type_name.unwrap_or_else(||
            DEFAULT_QUERY_TYPE_NAME.to_string()
        );

        match self.types.get(query_type_name.as_str()) {
            None => return Err(SchemaIndexBuildError::NoQueryTypeDefined {
                type_name: query_type_name,
            }),
            Some(type_) if type_.kind() != TypeKind::Object =>
                return Err(SchemaIndexBuildError::QueryTypeNotAnObject {
                    kind: type_.kind(),
                    type_name: query_type_name,
                }),
            Some(_) => (),
        }

        for type_ in self.types.values() {
            for field in type_.fields().values() {
                let field_type_name = field.type_annotation().innermost_type_name();
                if !self.types.contains_key(field_type_name) {
                    return Err(SchemaIndexBuildError::UndefinedFieldType {
                        field_name: field.name().to_string(),
                        field_type_name: field_type_name.to_string(),
                        type_name: type_.name().to_string(),
                    });
                }
            }
        }

        log::debug!(
            "Built a schema index of {} types with root query type `{}`.",
            self.types.len(),
            query_type_name,
        );

        Ok(SchemaIndex {
            connection_convention: self.connection_convention,
            query_type_name,
            types: self.types,
        })
    }

    pub fn connection_convention(mut self, convention: ConnectionConvention) -> Self {
        self.connection_convention = convention;
        self
    }

    /// Load every type defined in a GraphQL introspection result.
    ///
    /// Introspection types (`__Schema`, `__Type`, ...) and the built-in
    /// scalars are skipped. If the result names a `queryType`, it becomes
    /// the root query type.
    pub fn load_introspection_json(mut self, content: &str) -> Result<Self> {
        let result: IntrospectionResult = serde_json::from_str(content)?;
        let schema = match result.into_schema() {
            Some(schema) => schema,
            None => return Err(SchemaIndexBuildError::MissingIntrospectionSchema),
        };

        if let Some(query_type) = schema.query_type {
            self.query_type_name = Some(query_type.name);
        }

        for introspected_type in schema.types {
            if introspected_type.name.starts_with("__")
                || BUILTIN_SCALAR_NAMES.contains(&introspected_type.name.as_str()) {
                continue;
            }

            let mut builder = TypeDescriptorBuilder::new(
                introspected_type.name.as_str(),
                introspected_type.kind,
            );
            for field in introspected_type.fields.unwrap_or_default() {
                let type_annotation = field.type_ref.to_type_annotation(
                    introspected_type.name.as_str(),
                    field.name.as_str(),
                )?;
                builder.insert_field(FieldDefinition::new(field.name, type_annotation))?;
            }
            self.insert_type(builder.build())?;
        }

        Ok(self)
    }

    /// Parse GraphQL SDL and load the types it defines.
    ///
    /// A `schema { query: ... }` definition sets the root query type. Object
    /// and interface extensions add fields to the type they extend once
    /// [`build()`](SchemaIndexBuilder::build) is called, so they may appear
    /// before the type's definition. All other extensions and directive
    /// definitions are ignored.
    pub fn load_sdl(mut self, content: &str) -> Result<Self> {
        use graphql_parser::schema::Definition;
        use graphql_parser::schema::TypeDefinition;
        use graphql_parser::schema::TypeExtension;

        let doc = graphql_parser::schema::parse_schema::<String>(content)?;
        for def in doc.definitions {
            match def {
                Definition::SchemaDefinition(schema_def) => {
                    if let Some(query_type_name) = schema_def.query {
                        self.query_type_name = Some(query_type_name);
                    }
                },

                Definition::TypeDefinition(TypeDefinition::Enum(enum_def)) =>
                    self.insert_type(TypeDescriptor::leaf(enum_def.name, TypeKind::Enum))?,

                Definition::TypeDefinition(TypeDefinition::InputObject(input_def)) =>
                    self.insert_type(TypeDescriptor::leaf(input_def.name, TypeKind::InputObject))?,

                Definition::TypeDefinition(TypeDefinition::Interface(iface_def)) => {
                    let mut builder = TypeDescriptorBuilder::new(
                        iface_def.name.as_str(),
                        TypeKind::Interface,
                    );
                    for field in &iface_def.fields {
                        builder.insert_field(field_def_from_ast(field))?;
                    }
                    self.insert_type(builder.build())?;
                },

                Definition::TypeDefinition(TypeDefinition::Object(obj_def)) => {
                    let mut builder = TypeDescriptorBuilder::new(
                        obj_def.name.as_str(),
                        TypeKind::Object,
                    );
                    for field in &obj_def.fields {
                        builder.insert_field(field_def_from_ast(field))?;
                    }
                    self.insert_type(builder.build())?;
                },

                Definition::TypeDefinition(TypeDefinition::Scalar(scalar_def)) =>
                    self.insert_type(TypeDescriptor::leaf(scalar_def.name, TypeKind::Scalar))?,

                Definition::TypeDefinition(TypeDefinition::Union(union_def)) =>
                    self.insert_type(TypeDescriptor::leaf(union_def.name, TypeKind::Union))?,

                Definition::TypeExtension(TypeExtension::Interface(iface_ext)) =>
                    self.pending_extensions.push(PendingTypeExtension {
                        fields: iface_ext.fields.iter().map(field_def_from_ast).collect(),
                        kind: TypeKind::Interface,
                        type_name: iface_ext.name,
                    }),

                Definition::TypeExtension(TypeExtension::Object(obj_ext)) =>
                    self.pending_extensions.push(PendingTypeExtension {
                        fields: obj_ext.fields.iter().map(field_def_from_ast).collect(),
                        kind: TypeKind::Object,
                        type_name: obj_ext.name,
                    }),

                Definition::TypeExtension(_) =>
                    log::debug!("Ignoring a non-object type extension."),

                Definition::DirectiveDefinition(directive_def) =>
                    log::debug!(
                        "Ignoring the `@{}` directive definition.",
                        directive_def.name,
                    ),
            }
        }

        Ok(self)
    }

    pub fn query_type_name(mut self, type_name: impl AsRef<str>) -> Self {
        self.query_type_name = Some(type_name.as_ref().to_string());
        self
    }

    fn apply_extension(&mut self, extension: PendingTypeExtension) -> Result<()> {
        let type_ = match self.types.remove(extension.type_name.as_str()) {
            Some(type_) => type_,
            None => return Err(SchemaIndexBuildError::ExtensionOfUndefinedType {
                type_name: extension.type_name,
            }),
        };

        if type_.kind() != extension.kind {
            return Err(SchemaIndexBuildError::InvalidExtensionType {
                extension_kind: extension.kind,
                kind: type_.kind(),
                type_name: extension.type_name,
            });
        }

        let mut builder = TypeDescriptorBuilder::from(type_);
        for field in extension.fields {
            builder.insert_field(field)?;
        }
        self.types.insert(extension.type_name, builder.build());
        Ok(())
    }

    fn insert_type(&mut self, type_: TypeDescriptor) -> Result<()> {
        if type_.name().starts_with("__") {
            return Err(SchemaIndexBuildError::InvalidDunderPrefixedTypeName {
                type_name: type_.name().to_string(),
            });
        }

        if self.types.contains_key(type_.name()) {
            return Err(SchemaIndexBuildError::DuplicateTypeDefinition {
                type_name: type_.name().to_string(),
            });
        }

        self.types.insert(type_.name().to_string(), type_);
        Ok(())
    }
}
impl std::default::Default for SchemaIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields added by an `extend type` or `extend interface` definition.
#[derive(Debug)]
struct PendingTypeExtension {
    fields: Vec<FieldDefinition>,
    kind: TypeKind,
    type_name: String,
}

fn field_def_from_ast(field: &graphql_parser::schema::Field<'_, String>) -> FieldDefinition {
    FieldDefinition::new(
        field.name.as_str(),
        TypeAnnotation::from_ast(&field.field_type),
    )
}
