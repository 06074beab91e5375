use thiserror::Error;

/// Why a locale signal could not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleSignalError {
    #[error("no locale has been configured yet")]
    Unset,
    #[error("locale source unavailable: {0}")]
    Unavailable(String),
}

/// Read-only view of the current locale.
///
/// The value is owned and written elsewhere (a locale store, a request
/// context, a fixed test value). Readers take one snapshot per call and must
/// tolerate the value changing between calls. Implementations should report
/// failure through [`LocaleSignalError`]; a panic is caught by the resolver
/// and treated as [`LocaleSignalError::Unavailable`].
pub trait LocaleSignal: Send + Sync {
    fn current_locale(&self) -> Result<String, LocaleSignalError>;
}

/// A signal that always reports the same locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLocale(pub String);

impl FixedLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }
}

impl LocaleSignal for FixedLocale {
    fn current_locale(&self) -> Result<String, LocaleSignalError> {
        Ok(self.0.clone())
    }
}

/// A signal that never has a locale; resolution always uses the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocale;

impl LocaleSignal for NoLocale {
    fn current_locale(&self) -> Result<String, LocaleSignalError> {
        Err(LocaleSignalError::Unset)
    }
}

impl<F> LocaleSignal for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn current_locale(&self) -> Result<String, LocaleSignalError> {
        self().ok_or(LocaleSignalError::Unset)
    }
}
