use crate::operation::SelectionSet;
use crate::schema::SchemaIndex;
use crate::schema::SchemaLookupError;
use crate::types::TypeSchema;

type Result<T> = std::result::Result<T, SchemaLookupError>;

/// A Query operation built against a [`SchemaIndex`].
///
/// The whole selection tree is built synchronously by the closure passed to
/// [`Query::new()`], so a [`Query`] is complete (and read-only) as soon as
/// it exists:
///
/// ```
/// # use libgraphql_query::operation::Query;
/// # use libgraphql_query::schema::SchemaIndex;
/// # let schema = SchemaIndex::builder()
/// #     .load_sdl("type Query { shop: Shop } type Shop { name: String }")?
/// #     .build()?;
/// let query = Query::new(&schema, |root| {
///     root.add_field_selecting("shop", |shop| shop.add_field("name"))
/// })?;
///
/// assert_eq!(query.render(), "query { shop { name } }");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Query<'schema> {
    pub(super) selection_set: SelectionSet<'schema>,
}
impl<'schema> Query<'schema> {
    /// Build a [`Query`] whose root selection set is scoped to the schema's
    /// root query type.
    pub fn new<F>(schema: &'schema SchemaIndex, build: F) -> Result<Self>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        Self::on_type(schema, schema.query_type_name(), build)
    }

    /// Build a [`Query`] whose root selection set is scoped to the named
    /// type instead of the schema's root query type.
    pub fn on_type<F>(
        schema: &'schema SchemaIndex,
        root_type_name: &str,
        build: F,
    ) -> Result<Self>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        let root_type = schema.lookup(root_type_name)?;
        let mut selection_set = SelectionSet::new(
            schema,
            TypeSchema::for_type(root_type),
            None,
        );
        build(&mut selection_set)?;

        log::debug!(
            "Built a query on `{root_type_name}` with {} root selection(s).",
            selection_set.selections().len(),
        );
        Ok(Self { selection_set })
    }

    /// Render this query in GraphQL syntax, e.g. `query { shop { name } }`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }
}
impl std::fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query{}", self.selection_set)
    }
}
