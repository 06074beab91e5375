use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::catalog::MessageCatalog;
use crate::error::ConfigurationError;
use crate::params::Params;
use crate::signal::{LocaleSignal, LocaleSignalError};
use crate::template;

/// Resolves message identifiers against a catalog, the injected locale
/// signal and a fixed fallback locale.
///
/// Cloning is cheap; clones share the catalog and the signal.
#[derive(Clone)]
pub struct MessageResolver {
    inner: Arc<ResolverInner>,
    messages: Arc<MessageTable>,
}

struct ResolverInner {
    catalog: MessageCatalog,
    fallback_locale: String,
    signal: Box<dyn LocaleSignal>,
}

impl MessageResolver {
    /// Builds a resolver and its table of bound messages.
    ///
    /// Fails when `fallback_locale` has no dictionary in `catalog`.
    pub fn initialize(
        catalog: MessageCatalog,
        fallback_locale: impl Into<String>,
        signal: impl LocaleSignal + 'static,
    ) -> Result<Self, ConfigurationError> {
        let fallback_locale = fallback_locale.into();
        let Some(fallback) = catalog.dictionary(&fallback_locale) else {
            return Err(ConfigurationError::UnknownFallbackLocale {
                locale: fallback_locale,
                available: catalog.locales().map(str::to_string).collect(),
            });
        };
        let ids: Vec<String> = fallback.keys().cloned().collect();
        let inner = Arc::new(ResolverInner {
            catalog,
            fallback_locale,
            signal: Box::new(signal),
        });
        let messages = ids
            .into_iter()
            .map(|id| {
                let bound = BoundMessage {
                    id: Arc::from(id.as_str()),
                    inner: Arc::clone(&inner),
                };
                (id, bound)
            })
            .collect();
        debug!(
            fallback = %inner.fallback_locale,
            locales = inner.catalog.len(),
            "message resolver initialised"
        );
        Ok(Self {
            inner,
            messages: Arc::new(MessageTable { entries: messages }),
        })
    }

    /// Resolves `id` in the locale currently reported by the signal.
    pub fn resolve(&self, id: &str, params: Option<&Params>) -> String {
        let locale = self.inner.current_locale();
        self.inner.render(&locale, id, params)
    }

    /// Resolves `id` in an explicitly supplied locale. Locales absent from the
    /// catalog use the fallback.
    pub fn resolve_in(&self, locale: &str, id: &str, params: Option<&Params>) -> String {
        let locale = if self.inner.catalog.contains_locale(locale) {
            locale
        } else {
            self.inner.fallback_locale.as_str()
        };
        self.inner.render(locale, id, params)
    }

    /// An accessor over a fixed identifier. The identifier does not have to
    /// exist in the catalog.
    pub fn bind(&self, id: impl Into<String>) -> BoundMessage {
        let id: String = id.into();
        BoundMessage {
            id: Arc::from(id),
            inner: Arc::clone(&self.inner),
        }
    }

    /// Bound accessors for every identifier of the fallback dictionary.
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn message(&self, id: &str) -> Option<&BoundMessage> {
        self.messages.get(id)
    }

    /// The locale `resolve` would use right now.
    pub fn current_locale(&self) -> String {
        self.inner.current_locale()
    }

    pub fn fallback_locale(&self) -> &str {
        &self.inner.fallback_locale
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.inner.catalog
    }
}

impl fmt::Debug for MessageResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageResolver")
            .field("fallback_locale", &self.inner.fallback_locale)
            .field("locales", &self.inner.catalog.locales().collect::<Vec<_>>())
            .field("messages", &self.messages.len())
            .finish()
    }
}

impl ResolverInner {
    fn current_locale(&self) -> String {
        // A panicking signal degrades like an unavailable one.
        let reading = panic::catch_unwind(AssertUnwindSafe(|| self.signal.current_locale()))
            .unwrap_or_else(|_| {
                Err(LocaleSignalError::Unavailable("locale signal panicked".into()))
            });
        match reading {
            Ok(locale) if self.catalog.contains_locale(&locale) => locale,
            Ok(locale) => {
                debug!(
                    locale = %locale,
                    fallback = %self.fallback_locale,
                    "locale has no dictionary; using fallback"
                );
                self.fallback_locale.clone()
            }
            Err(err) => {
                debug!(
                    error = %err,
                    fallback = %self.fallback_locale,
                    "locale signal unavailable; using fallback"
                );
                self.fallback_locale.clone()
            }
        }
    }

    fn template(&self, locale: &str, id: &str) -> Option<&str> {
        self.catalog
            .template(locale, id)
            .or_else(|| self.catalog.template(&self.fallback_locale, id))
    }

    fn render(&self, locale: &str, id: &str, params: Option<&Params>) -> String {
        match self.template(locale, id) {
            Some(found) => template::format(found, params),
            None => {
                debug!(id, locale, "message not found in any dictionary");
                id.to_string()
            }
        }
    }
}

/// A resolver partially applied to one identifier.
#[derive(Clone)]
pub struct BoundMessage {
    id: Arc<str>,
    inner: Arc<ResolverInner>,
}

impl BoundMessage {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn format(&self, params: Option<&Params>) -> String {
        let locale = self.inner.current_locale();
        self.inner.render(&locale, &self.id, params)
    }

    pub fn text(&self) -> String {
        self.format(None)
    }
}

impl fmt::Debug for BoundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMessage").field("id", &self.id).finish()
    }
}

impl fmt::Display for BoundMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// One [`BoundMessage`] per fallback identifier, in dictionary order.
#[derive(Debug)]
pub struct MessageTable {
    entries: IndexMap<String, BoundMessage>,
}

impl MessageTable {
    pub fn get(&self, id: &str) -> Option<&BoundMessage> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoundMessage> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
