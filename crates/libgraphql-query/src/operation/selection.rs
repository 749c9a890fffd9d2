use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;

#[derive(Clone, Debug)]
pub enum Selection<'schema> {
    Field(FieldSelection<'schema>),
    InlineFragment(InlineFragmentSelection<'schema>),
}
impl<'schema> Selection<'schema> {
    pub fn as_field(&self) -> Option<&FieldSelection<'schema>> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_inline_fragment(&self) -> Option<&InlineFragmentSelection<'schema>> {
        if let Self::InlineFragment(fragment) = self {
            Some(fragment)
        } else {
            None
        }
    }
}
impl std::fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::InlineFragment(fragment) => write!(f, "{fragment}"),
        }
    }
}
