use std::collections::HashMap;
use std::fmt::Display;

/// Named substitution values for a message template.
///
/// A key mapped to `None` is an explicit null: its placeholder is replaced by
/// an empty string. A key that is not present at all leaves the placeholder
/// literal. Values are rendered with [`Display`] when inserted, so `0`,
/// `false` and `""` all substitute as themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, Option<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn with_null(mut self, name: impl Into<String>) -> Self {
        self.insert_null(name);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), Some(value.to_string()));
    }

    pub fn insert_null(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), None);
    }

    /// `None` when the key is absent, `Some(None)` for an explicit null.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.values.get(name).map(Option::as_deref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
