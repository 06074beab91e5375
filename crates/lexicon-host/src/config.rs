use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CATALOG_DIR_ENV: &str = "LEXICON_CATALOG_DIR";
pub const FALLBACK_LOCALE_ENV: &str = "LEXICON_FALLBACK_LOCALE";

const DEFAULT_CATALOG_DIR: &str = "locale/messages";
const DEFAULT_FALLBACK_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML config {}: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where catalogs live and which locales to use.
///
/// Missing fields fall back to the environment (`LEXICON_CATALOG_DIR`,
/// `LEXICON_FALLBACK_LOCALE`) and then to `locale/messages` / `en`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct I18nConfig {
    pub catalog_dir: PathBuf,
    pub fallback_locale: String,
    /// Preferred initial locale; `None` defers to environment selection.
    pub locale: Option<String>,
}

/// Fields as written in a config file; absent ones keep their defaults.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    catalog_dir: Option<PathBuf>,
    fallback_locale: Option<String>,
    locale: Option<String>,
}

impl ConfigFile {
    fn into_config(self, base_dir: Option<&Path>) -> I18nConfig {
        let mut config = I18nConfig::default();
        if let Some(dir) = self.catalog_dir {
            config.catalog_dir = match base_dir {
                Some(base) if dir.is_relative() => base.join(dir),
                _ => dir,
            };
        }
        if let Some(fallback) = self.fallback_locale {
            config.fallback_locale = fallback;
        }
        config.locale = self.locale;
        config
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        let catalog_dir = std::env::var_os(CATALOG_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_DIR));
        let fallback_locale = std::env::var(FALLBACK_LOCALE_ENV)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_LOCALE.to_string());
        Self {
            catalog_dir,
            fallback_locale,
            locale: None,
        }
    }
}

impl I18nConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.into_config(None))
    }

    /// Reads a TOML or JSON (by `.json` extension) config file. A relative
    /// `catalog_dir` written in the file is resolved against the file's
    /// directory; one taken from the environment is kept as is.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?,
            _ => toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?,
        };
        Ok(file.into_config(path.parent()))
    }

    pub fn with_catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = dir.into();
        self
    }

    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        if locale.is_some() {
            self.locale = locale;
        }
        self
    }
}
