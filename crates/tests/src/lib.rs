//! Shared fixtures for lexicon end-to-end tests.

use std::path::{Path, PathBuf};

use lexicon_host::I18nConfig;

/// Directory of the bundled starter dictionaries (`en`, `es`, `fr`, `nl`, `de`).
pub fn fixture_catalog_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/messages")
}

/// Config pointing at the bundled dictionaries with `en` as fallback.
pub fn fixture_config(locale: Option<&str>) -> I18nConfig {
    I18nConfig {
        catalog_dir: fixture_catalog_dir(),
        fallback_locale: "en".to_string(),
        locale: locale.map(str::to_string),
    }
}

/// Clears every variable consulted during locale selection.
///
/// # Safety
/// Mutates the process environment; callers must not run concurrently with
/// other threads reading it (use `#[serial]`).
pub unsafe fn clear_locale_env() {
    for key in [
        lexicon_host::selection::LOCALE_CLI_ENV,
        lexicon_host::selection::LOCALE_ENV,
        "LC_ALL",
        "LANG",
        "LC_MESSAGES",
    ] {
        unsafe { std::env::remove_var(key) };
    }
}
