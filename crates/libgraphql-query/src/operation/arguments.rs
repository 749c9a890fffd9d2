use indexmap::IndexMap;

/// The arguments passed to a selected field, kept in the order they were
/// supplied.
///
/// Values are rendered as JSON literals, so strings are quoted and escaped
/// while numbers, booleans and `null` are written as-is. Floats keep their
/// fractional part, so `10.0` renders as `10.0`; pass an integer to get `10`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments(IndexMap<String, serde_json::Value>);
impl Arguments {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// Set the value of an argument. Re-setting an existing argument
    /// replaces its value without changing its position.
    pub fn insert(
        &mut self,
        name: impl AsRef<str>,
        value: impl Into<serde_json::Value>,
    ) -> Option<serde_json::Value> {
        self.0.insert(name.as_ref().to_string(), value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Renders as `""` when there are no arguments, and as
    /// ` (name: value, ...)` otherwise.
    pub fn to_graphql_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }

        let formatted_args =
            self.0.iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect::<Vec<_>>()
                .join(", ");

        format!(" ({formatted_args})")
    }

    pub fn with(
        mut self,
        name: impl AsRef<str>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.insert(name, value);
        self
    }
}
impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_graphql_string().as_str())
    }
}
impl<K, V, const N: usize> std::convert::From<[(K, V); N]> for Arguments
where
    K: AsRef<str>,
    V: Into<serde_json::Value>,
{
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}
impl<K, V> std::iter::FromIterator<(K, V)> for Arguments
where
    K: AsRef<str>,
    V: Into<serde_json::Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = Self::new();
        for (name, value) in iter {
            args.insert(name, value);
        }
        args
    }
}
