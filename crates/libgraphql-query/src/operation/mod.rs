mod arguments;
mod field_selection;
mod inline_fragment_selection;
mod query;
mod selection;
mod selection_set;

pub use arguments::Arguments;
pub use field_selection::FieldSelection;
pub use inline_fragment_selection::InlineFragmentSelection;
pub use query::Query;
pub use selection::Selection;
pub use selection_set::SelectionParent;
pub use selection_set::SelectionSet;

#[cfg(test)]
mod tests;
