mod field_definition;
mod field_descriptor;
mod type_annotation;
mod type_descriptor;
mod type_descriptor_builder;
mod type_kind;
mod type_schema;

pub use field_definition::FieldDefinition;
pub use field_descriptor::FieldDescriptor;
pub use type_annotation::TypeAnnotation;
pub use type_descriptor::TypeDescriptor;
pub use type_descriptor_builder::TypeDescriptorBuilder;
pub use type_kind::TypeKind;
pub use type_schema::TypeSchema;
