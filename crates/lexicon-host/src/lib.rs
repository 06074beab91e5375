//! Host-side wiring for lexicon.
//!
//! Loads message catalogs from disk, selects the starting locale from the
//! environment, owns the settable [`LocaleStore`] and hands out a
//! [`lexicon_i18n::MessageResolver`] that reads it.

pub mod boot;
pub mod config;
pub mod loader;
pub mod report;
pub mod selection;
pub mod store;

pub use boot::{BootError, Localization, boot};
pub use config::{ConfigError, I18nConfig};
pub use loader::{CatalogLoadError, DictionaryFormat, load_catalog_dir, parse_dictionary};
pub use report::{CoverageReport, LocaleCoverage, PlaceholderMismatch, coverage_report};
pub use selection::{select_locale, system_locale};
pub use store::{LocaleStore, StoreError};
