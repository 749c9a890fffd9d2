mod connection_convention;
mod introspection;
mod schema_index;
mod schema_index_build_error;
mod schema_index_builder;
mod schema_lookup_error;

pub use connection_convention::ConnectionConvention;
pub use schema_index::SchemaIndex;
pub use schema_index_build_error::SchemaIndexBuildError;
pub use schema_index_builder::SchemaIndexBuilder;
pub use schema_lookup_error::SchemaLookupError;

#[cfg(test)]
mod tests;
