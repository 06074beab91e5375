use std::collections::BTreeSet;
use std::sync::Arc;

use arc_swap::ArcSwap;
use lexicon_i18n::{LocaleSignal, LocaleSignalError};
use thiserror::Error;
use tokio::sync::watch;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("locale `{locale}` is not supported")]
    UnsupportedLocale { locale: String },
}

/// The process-wide current locale.
///
/// Reads are lock-free snapshots; writers go through [`LocaleStore::set_locale`],
/// which also notifies subscribers. Clones share the same state.
#[derive(Clone, Debug)]
pub struct LocaleStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    current: ArcSwap<String>,
    supported: BTreeSet<String>,
    notify: watch::Sender<String>,
}

impl LocaleStore {
    pub fn new<I, S>(initial: impl Into<String>, supported: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let initial = initial.into();
        let supported: BTreeSet<String> = supported.into_iter().map(Into::into).collect();
        if !supported.contains(&initial) {
            return Err(StoreError::UnsupportedLocale { locale: initial });
        }
        let (notify, _) = watch::channel(initial.clone());
        Ok(Self {
            inner: Arc::new(StoreInner {
                current: ArcSwap::from_pointee(initial),
                supported,
                notify,
            }),
        })
    }

    pub fn get(&self) -> String {
        self.inner.current.load().as_ref().clone()
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.inner.supported.contains(locale)
    }

    pub fn supported(&self) -> impl Iterator<Item = &str> {
        self.inner.supported.iter().map(String::as_str)
    }

    /// Switches the current locale. Setting the current value again is a
    /// no-op for subscribers.
    pub fn set_locale(&self, locale: &str) -> Result<(), StoreError> {
        if !self.supports(locale) {
            return Err(StoreError::UnsupportedLocale {
                locale: locale.to_string(),
            });
        }
        // The snapshot is replaced under the watch lock so readers and
        // subscribers never disagree about the latest value.
        let mut previous = None;
        self.inner.notify.send_if_modified(|current| {
            if current.as_str() == locale {
                return false;
            }
            self.inner.current.store(Arc::new(locale.to_string()));
            previous = Some(std::mem::replace(current, locale.to_string()));
            true
        });
        if let Some(previous) = previous {
            info!(from = %previous, to = %locale, "locale changed");
        }
        Ok(())
    }

    /// Receiver that observes every subsequent locale change.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.inner.notify.subscribe()
    }
}

impl LocaleSignal for LocaleStore {
    fn current_locale(&self) -> Result<String, LocaleSignalError> {
        Ok(self.get())
    }
}
