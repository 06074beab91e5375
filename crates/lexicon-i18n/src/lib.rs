//! Message catalog and fallback resolver for lexicon.
//!
//! A [`MessageResolver`] maps a message identifier and an optional
//! [`Params`] bag to a display string. The current locale comes from an
//! injected [`LocaleSignal`]; when the signal fails, names an unknown locale,
//! or the identifier is missing from that locale, the fixed fallback locale is
//! used. Identifiers unknown everywhere resolve to themselves.
//!
//! ```
//! use lexicon_i18n::{FixedLocale, MessageCatalog, MessageResolver, Params};
//!
//! let catalog = MessageCatalog::new()
//!     .with_locale("en", [("greeting", "Hello {name}")])
//!     .with_locale("fr", [("greeting", "Bonjour {name}")]);
//! let resolver = MessageResolver::initialize(catalog, "en", FixedLocale::new("fr")).unwrap();
//! let params = Params::new().with("name", "Ana");
//! assert_eq!(resolver.resolve("greeting", Some(&params)), "Bonjour Ana");
//! ```

pub mod catalog;
pub mod error;
pub mod locale;
pub mod params;
pub mod resolver;
pub mod signal;
pub mod template;

pub use catalog::{Dictionary, MessageCatalog};
pub use error::ConfigurationError;
pub use locale::{normalize_locale, select_locale_with_sources};
pub use params::Params;
pub use resolver::{BoundMessage, MessageResolver, MessageTable};
pub use signal::{FixedLocale, LocaleSignal, LocaleSignalError, NoLocale};
