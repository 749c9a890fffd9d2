/// The declared (possibly wrapped) type of a [`FieldDefinition`].
///
/// [`FieldDefinition`]: crate::types::FieldDefinition
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List {
        inner: Box<TypeAnnotation>,
        nullable: bool,
    },
    Named {
        nullable: bool,
        type_name: String,
    },
}
impl TypeAnnotation {
    /// A nullable reference to the named type.
    pub fn named(type_name: impl AsRef<str>) -> Self {
        Self::Named {
            nullable: true,
            type_name: type_name.as_ref().to_string(),
        }
    }

    /// A nullable list whose items are annotated with `self`.
    pub fn into_list(self) -> Self {
        Self::List {
            inner: Box::new(self),
            nullable: true,
        }
    }

    /// The same annotation, marked non-nullable.
    pub fn into_non_null(self) -> Self {
        match self {
            Self::List { inner, .. } => Self::List { inner, nullable: false },
            Self::Named { type_name, .. } => Self::Named {
                nullable: false,
                type_name,
            },
        }
    }

    /// Recursively unwrap list wrappers and return the name of the
    /// innermost named type.
    pub fn innermost_type_name(&self) -> &str {
        match self {
            Self::List { inner, .. } => inner.innermost_type_name(),
            Self::Named { type_name, .. } => type_name.as_str(),
        }
    }

    /// Indicates whether the outermost wrapper (non-null aside) is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List { .. })
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } => *nullable,
            Self::Named { nullable, .. } => *nullable,
        }
    }

    pub(crate) fn from_ast(ast_type: &graphql_parser::schema::Type<'_, String>) -> Self {
        Self::from_ast_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_impl(
        ast_type: &graphql_parser::schema::Type<'_, String>,
        nullable: bool,
    ) -> Self {
        use graphql_parser::schema::Type;
        match ast_type {
            Type::ListType(inner) => Self::List {
                inner: Box::new(Self::from_ast_impl(inner, true)),
                nullable,
            },

            Type::NamedType(name) => Self::Named {
                nullable,
                type_name: name.to_string(),
            },

            Type::NonNullType(inner) =>
                Self::from_ast_impl(inner, false),
        }
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, nullable } => write!(
                f,
                "[{}]{}",
                inner,
                if *nullable { "" } else { "!" },
            ),

            Self::Named { nullable, type_name } => write!(
                f,
                "{}{}",
                type_name,
                if *nullable { "" } else { "!" },
            ),
        }
    }
}
