//! Build GraphQL queries programmatically against a schema.
//!
//! A [`SchemaIndex`](schema::SchemaIndex) describes the types a server
//! exposes. [`Query`](operation::Query) and
//! [`SelectionSet`](operation::SelectionSet) check every selected field and
//! inline-fragment type against it as the query is built, then render the
//! result to GraphQL query text.

pub mod operation;
pub mod schema;
pub mod types;

#[cfg(test)]
mod test_utils;
