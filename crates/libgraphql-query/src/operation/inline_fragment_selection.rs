use crate::operation::SelectionSet;

/// An `... on TypeName { ... }` selection. Its [`SelectionSet`] is scoped
/// to `type_name` rather than to the enclosing type.
#[derive(Clone, Debug)]
pub struct InlineFragmentSelection<'schema> {
    pub(super) selection_set: SelectionSet<'schema>,
    pub(super) type_name: String,
}
impl<'schema> InlineFragmentSelection<'schema> {
    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }
}
impl std::fmt::Display for InlineFragmentSelection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "... on {}{}", self.type_name, self.selection_set)
    }
}
