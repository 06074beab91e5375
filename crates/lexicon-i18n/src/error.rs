use thiserror::Error;

/// Raised while building a resolver; fatal to startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("fallback locale `{locale}` has no dictionary in the catalog (available: {})", .available.join(", "))]
    UnknownFallbackLocale {
        locale: String,
        available: Vec<String>,
    },
}
