use crate::operation::Arguments;
use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::Selection;
use crate::schema::SchemaIndex;
use crate::schema::SchemaLookupError;
use crate::types::FieldDescriptor;
use crate::types::TypeSchema;

type Result<T> = std::result::Result<T, SchemaLookupError>;

/// Where a nested [`SelectionSet`] sits within its tree. This is plain
/// context for diagnostics; parents own their children, never the reverse.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SelectionParent {
    pub(super) path: Vec<String>,
    pub(super) type_name: String,
}
impl SelectionParent {
    /// The selection path from the root down to (and including) the
    /// selection that owns the child set.
    pub fn path(&self) -> &[String] {
        self.path.as_slice()
    }

    /// The type the enclosing selection set is scoped to.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}

/// An ordered group of field and inline-fragment selections scoped to a
/// single type.
///
/// Every `add_*` method validates its reference against the
/// [`SchemaIndex`] before touching the set, and builds the child selection
/// set by running the supplied closure before inserting it. If either step
/// fails, the error is returned and this set is left unmodified.
///
/// Field selections are unique by name. Adding a field that has already
/// been selected replaces the earlier selection's arguments and children
/// but keeps its position.
#[derive(Clone, Debug)]
pub struct SelectionSet<'schema> {
    pub(super) parent: Option<SelectionParent>,
    pub(super) schema: &'schema SchemaIndex,
    pub(super) selections: Vec<Selection<'schema>>,
    pub(super) type_schema: TypeSchema<'schema>,
}
impl<'schema> SelectionSet<'schema> {
    /// Create an empty, parentless [`SelectionSet`] scoped to the named type.
    pub fn for_type(schema: &'schema SchemaIndex, type_name: &str) -> Result<Self> {
        let type_ = schema.lookup(type_name)?;
        Ok(Self::new(schema, TypeSchema::for_type(type_), None))
    }

    pub(super) fn new(
        schema: &'schema SchemaIndex,
        type_schema: TypeSchema<'schema>,
        parent: Option<SelectionParent>,
    ) -> Self {
        Self {
            parent,
            schema,
            selections: vec![],
            type_schema,
        }
    }

    /// Select a cursor connection without arguments, expanding it to its
    /// `pageInfo` and `edges` selections with an empty `node`.
    pub fn add_connection(&mut self, name: &str) -> Result<()> {
        self.add_connection_with(name, Arguments::new(), no_selections)
    }

    pub fn add_connection_selecting<F>(&mut self, name: &str, build_node: F) -> Result<()>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        self.add_connection_with(name, Arguments::new(), build_node)
    }

    pub fn add_connection_with_args(
        &mut self,
        name: &str,
        args: impl Into<Arguments>,
    ) -> Result<()> {
        self.add_connection_with(name, args, no_selections)
    }

    /// Select a cursor connection. The connection's selection set always
    /// contains exactly
    ///
    /// ```text
    /// pageInfo { hasNextPage, hasPreviousPage }, edges { cursor, node { ... } }
    /// ```
    ///
    /// where `build_node` populates the `node` selections.
    pub fn add_connection_with<F>(
        &mut self,
        name: &str,
        args: impl Into<Arguments>,
        build_node: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        let descriptor = FieldDescriptor::resolve(
            self.schema,
            name,
            self.type_schema.name(),
        )?;
        if !descriptor.is_connection() {
            log::warn!(
                "Expanding `{}.{}` as a connection, but its `{}` type is not \
                a connection type for this schema.",
                self.type_schema.name(),
                name,
                descriptor.type_name(),
            );
        }

        let mut selection_set = self.child_selection_set(name, descriptor.into_schema());
        selection_set.add_field_selecting("pageInfo", |page_info| {
            page_info.add_field("hasNextPage")?;
            page_info.add_field("hasPreviousPage")
        })?;
        selection_set.add_field_selecting("edges", |edges| {
            edges.add_field("cursor")?;
            edges.add_field_selecting("node", build_node)
        })?;

        self.upsert_field(FieldSelection {
            arguments: args.into(),
            name: name.to_string(),
            selection_set,
        });
        Ok(())
    }

    /// Select a field without arguments or sub-selections.
    pub fn add_field(&mut self, name: &str) -> Result<()> {
        self.add_field_with(name, Arguments::new(), no_selections)
    }

    pub fn add_field_selecting<F>(&mut self, name: &str, build: F) -> Result<()>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        self.add_field_with(name, Arguments::new(), build)
    }

    pub fn add_field_with_args(
        &mut self,
        name: &str,
        args: impl Into<Arguments>,
    ) -> Result<()> {
        self.add_field_with(name, args, no_selections)
    }

    /// Select a field with the given arguments, populating its selection set
    /// via `build`.
    pub fn add_field_with<F>(
        &mut self,
        name: &str,
        args: impl Into<Arguments>,
        build: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        let descriptor = FieldDescriptor::resolve(
            self.schema,
            name,
            self.type_schema.name(),
        )?;
        let mut selection_set = self.child_selection_set(name, descriptor.into_schema());
        build(&mut selection_set)?;

        self.upsert_field(FieldSelection {
            arguments: args.into(),
            name: name.to_string(),
            selection_set,
        });
        Ok(())
    }

    /// Select an empty `... on TypeName` inline fragment.
    pub fn add_inline_fragment_on(&mut self, type_name: &str) -> Result<()> {
        self.add_inline_fragment_on_with(type_name, no_selections)
    }

    /// Select an `... on TypeName` inline fragment, populating its selection
    /// set via `build`. Inline fragments are always appended.
    pub fn add_inline_fragment_on_with<F>(&mut self, type_name: &str, build: F) -> Result<()>
    where
        F: FnOnce(&mut SelectionSet<'schema>) -> Result<()>,
    {
        let type_ = self.schema.lookup(type_name)?;
        let mut selection_set = self.child_selection_set(
            format!("... on {type_name}").as_str(),
            TypeSchema::for_type(type_),
        );
        build(&mut selection_set)?;

        log::trace!(
            "Appending an inline fragment on `{type_name}` at `{}`.",
            self.path().join("."),
        );
        self.selections.push(Selection::InlineFragment(InlineFragmentSelection {
            selection_set,
            type_name: type_name.to_string(),
        }));
        Ok(())
    }

    /// The field selected under `name`, if any.
    pub fn field(&self, name: &str) -> Option<&FieldSelection<'schema>> {
        self.selections.iter()
            .filter_map(|selection| selection.as_field())
            .find(|field| field.name() == name)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn parent(&self) -> Option<&SelectionParent> {
        self.parent.as_ref()
    }

    pub fn parent_type_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|parent| parent.type_name())
    }

    /// The selection path leading to this set (empty for a root set).
    pub fn path(&self) -> &[String] {
        match &self.parent {
            Some(parent) => parent.path(),
            None => &[],
        }
    }

    /// Render this selection set in GraphQL query syntax. Sets scoped to a
    /// leaf type render as the empty string; all others render braces, even
    /// when nothing is selected.
    ///
    /// Enums count as leaves here, not only scalars, so a set scoped to an
    /// enum never renders a `{ ... }` block.
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn selections(&self) -> &[Selection<'schema>] {
        self.selections.as_slice()
    }

    pub fn type_schema(&self) -> &TypeSchema<'schema> {
        &self.type_schema
    }

    fn child_selection_set(
        &self,
        path_segment: &str,
        type_schema: TypeSchema<'schema>,
    ) -> SelectionSet<'schema> {
        let mut path = self.path().to_vec();
        path.push(path_segment.to_string());
        SelectionSet::new(
            self.schema,
            type_schema,
            Some(SelectionParent {
                path,
                type_name: self.type_schema.name().to_string(),
            }),
        )
    }

    fn upsert_field(&mut self, field: FieldSelection<'schema>) {
        let existing_idx = self.selections.iter().position(|selection|
            matches!(selection, Selection::Field(existing) if existing.name == field.name)
        );

        match existing_idx {
            Some(idx) => {
                log::trace!(
                    "Replacing the `{}` selection at position {idx} of `{}`.",
                    field.name,
                    self.type_schema.name(),
                );
                self.selections[idx] = Selection::Field(field);
            },

            None => {
                log::trace!(
                    "Appending the `{}` selection to `{}`.",
                    field.name,
                    self.type_schema.name(),
                );
                self.selections.push(Selection::Field(field));
            },
        }
    }
}
impl std::fmt::Display for SelectionSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.type_schema.is_leaf() {
            return Ok(());
        }

        f.write_str(" { ")?;
        for (idx, selection) in self.selections.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selection}")?;
        }
        f.write_str(" }")
    }
}

fn no_selections(_: &mut SelectionSet<'_>) -> Result<()> {
    Ok(())
}
