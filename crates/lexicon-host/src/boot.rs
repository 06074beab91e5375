use lexicon_i18n::{ConfigurationError, MessageResolver};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::I18nConfig;
use crate::loader::{CatalogLoadError, load_catalog_dir};
use crate::selection::select_locale;
use crate::store::{LocaleStore, StoreError};

#[derive(Debug, Error)]
pub enum BootError {
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A loaded catalog, the settable current locale and a resolver reading it.
#[derive(Clone, Debug)]
pub struct Localization {
    pub store: LocaleStore,
    pub resolver: MessageResolver,
}

impl Localization {
    pub fn set_locale(&self, locale: &str) -> Result<(), StoreError> {
        self.store.set_locale(locale)
    }
}

/// Loads the catalog named by `config`, selects the initial locale and wires
/// a [`LocaleStore`] into a [`MessageResolver`].
///
/// A selected locale without a dictionary is not an error: the store starts
/// on the fallback locale instead.
pub fn boot(config: &I18nConfig) -> Result<Localization, BootError> {
    let catalog = load_catalog_dir(&config.catalog_dir)?;
    let fallback = config.fallback_locale.as_str();
    if !catalog.contains_locale(fallback) {
        return Err(ConfigurationError::UnknownFallbackLocale {
            locale: fallback.to_string(),
            available: catalog.locales().map(str::to_string).collect(),
        }
        .into());
    }

    let selected = select_locale(config.locale.as_deref(), fallback);
    let initial = if catalog.contains_locale(&selected) {
        selected
    } else {
        warn!(
            selected = %selected,
            fallback = %fallback,
            "selected locale has no dictionary; starting on fallback"
        );
        fallback.to_string()
    };

    let store = LocaleStore::new(initial, catalog.locales())?;
    let resolver = MessageResolver::initialize(catalog, fallback, store.clone())?;
    info!(
        locale = %store.get(),
        fallback = %resolver.fallback_locale(),
        messages = resolver.messages().len(),
        "localization ready"
    );
    Ok(Localization { store, resolver })
}
