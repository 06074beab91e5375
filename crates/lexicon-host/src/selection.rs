use std::env;

use lexicon_i18n::{normalize_locale, select_locale_with_sources};

pub const LOCALE_CLI_ENV: &str = "LEXICON_LOCALE_CLI";
pub const LOCALE_ENV: &str = "LEXICON_LOCALE";

/// Picks the initial locale: `LEXICON_LOCALE_CLI`, then `explicit`, then
/// `LEXICON_LOCALE`, then the system locale, then `default`.
///
/// The result is a normalized primary tag; it is not checked against any
/// catalog here.
pub fn select_locale(explicit: Option<&str>, default: &str) -> String {
    let cli_locale = env::var(LOCALE_CLI_ENV).ok();
    let env_locale = env::var(LOCALE_ENV).ok();
    let system = system_locale();
    select_locale_with_sources(
        cli_locale.as_deref(),
        explicit,
        env_locale.as_deref(),
        system.as_deref(),
        default,
    )
}

/// POSIX locale from `LC_ALL`, `LANG` or `LC_MESSAGES`. `C` and `POSIX` carry
/// no language and are ignored.
pub fn system_locale() -> Option<String> {
    for key in ["LC_ALL", "LANG", "LC_MESSAGES"] {
        if let Ok(value) = env::var(key) {
            let trimmed = value.trim();
            let stripped = trimmed.split('.').next().unwrap_or(trimmed);
            if stripped.is_empty() || matches!(stripped, "C" | "POSIX") {
                continue;
            }
            return Some(normalize_locale(stripped, stripped));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [LOCALE_CLI_ENV, LOCALE_ENV, "LC_ALL", "LANG", "LC_MESSAGES"];

    fn with_env(vars: &[(&str, &str)], f: impl FnOnce()) {
        // Safety: every test touching the environment runs under #[serial].
        unsafe {
            for key in KEYS {
                env::remove_var(key);
            }
            for (key, value) in vars {
                env::set_var(key, value);
            }
        }
        f();
        unsafe {
            for key in KEYS {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn cli_env_beats_explicit() {
        with_env(&[(LOCALE_CLI_ENV, "fr-FR"), ("LANG", "de_DE.UTF-8")], || {
            assert_eq!(select_locale(Some("es"), "en"), "fr");
        });
    }

    #[test]
    #[serial]
    fn explicit_beats_env_and_system() {
        with_env(&[(LOCALE_ENV, "nl"), ("LANG", "de_DE.UTF-8")], || {
            assert_eq!(select_locale(Some("es-ES"), "en"), "es");
        });
    }

    #[test]
    #[serial]
    fn system_locale_skips_c_locale() {
        with_env(&[("LC_ALL", "C.UTF-8"), ("LANG", "nl_NL.UTF-8")], || {
            assert_eq!(system_locale().as_deref(), Some("nl"));
            assert_eq!(select_locale(None, "en"), "nl");
        });
    }

    #[test]
    #[serial]
    fn default_when_nothing_is_set() {
        with_env(&[], || {
            assert_eq!(system_locale(), None);
            assert_eq!(select_locale(None, "fr"), "fr");
        });
    }
}
