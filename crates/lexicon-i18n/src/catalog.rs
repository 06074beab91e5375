use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message identifier → template string for one locale, in insertion order.
pub type Dictionary = IndexMap<String, String>;

/// Immutable mapping from locale identifier to its [`Dictionary`].
///
/// A catalog is assembled once (usually by a loader reading bundled assets)
/// and is only ever read afterwards. Locale identifiers are compared exactly;
/// there is no `fr-CA` → `fr` negotiation at this level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MessageCatalog {
    dictionaries: IndexMap<String, Dictionary>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the dictionary for `locale`. Builder-style.
    pub fn with_locale<L, I, K, V>(mut self, locale: L, entries: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.insert_dictionary(
            locale,
            entries
                .into_iter()
                .map(|(id, template)| (id.into(), template.into()))
                .collect(),
        );
        self
    }

    /// Returns the previous dictionary when `locale` was already present.
    pub fn insert_dictionary(
        &mut self,
        locale: impl Into<String>,
        dictionary: Dictionary,
    ) -> Option<Dictionary> {
        self.dictionaries.insert(locale.into(), dictionary)
    }

    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        self.dictionaries.get(locale)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.dictionaries.contains_key(locale)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.dictionaries.keys().map(String::as_str)
    }

    pub fn template(&self, locale: &str, id: &str) -> Option<&str> {
        self.dictionary(locale)
            .and_then(|dictionary| dictionary.get(id))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.dictionaries
            .iter()
            .map(|(locale, dictionary)| (locale.as_str(), dictionary))
    }
}

impl<L: Into<String>> FromIterator<(L, Dictionary)> for MessageCatalog {
    fn from_iter<I: IntoIterator<Item = (L, Dictionary)>>(iter: I) -> Self {
        let mut catalog = MessageCatalog::new();
        for (locale, dictionary) in iter {
            catalog.insert_dictionary(locale, dictionary);
        }
        catalog
    }
}
