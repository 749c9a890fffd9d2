use crate::operation::Arguments;
use crate::operation::SelectionSet;

#[derive(Clone, Debug)]
pub struct FieldSelection<'schema> {
    pub(super) arguments: Arguments,
    pub(super) name: String,
    pub(super) selection_set: SelectionSet<'schema>,
}
impl<'schema> FieldSelection<'schema> {
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }
}
impl std::fmt::Display for FieldSelection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.name, self.arguments, self.selection_set)
    }
}
