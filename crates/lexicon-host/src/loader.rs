use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lexicon_i18n::{Dictionary, MessageCatalog};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {format} dictionary {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: DictionaryFormat,
        message: String,
    },
    #[error("locale `{locale}` is defined twice ({} and {})", .first.display(), .second.display())]
    DuplicateLocale {
        locale: String,
        first: PathBuf,
        second: PathBuf,
    },
    #[error("no dictionaries found in {}", .dir.display())]
    Empty { dir: PathBuf },
}

/// Structured-text formats accepted for a single locale's dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictionaryFormat {
    Json,
    Toml,
    Yaml,
}

impl DictionaryFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str())? {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl std::fmt::Display for DictionaryFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        })
    }
}

/// Parses one flat `identifier -> template` document, keeping entry order.
pub fn parse_dictionary(format: DictionaryFormat, contents: &str) -> Result<Dictionary, String> {
    match format {
        DictionaryFormat::Json => serde_json::from_str(contents).map_err(|err| err.to_string()),
        DictionaryFormat::Toml => toml::from_str(contents).map_err(|err| err.to_string()),
        DictionaryFormat::Yaml => serde_yaml_bw::from_str(contents).map_err(|err| err.to_string()),
    }
}

/// Loads every `<locale>.{json,toml,yaml,yml}` file in `dir` into a catalog.
///
/// Locales are inserted in file-name order so the result does not depend on
/// directory iteration order. Other files are skipped.
pub fn load_catalog_dir(dir: &Path) -> Result<MessageCatalog, CatalogLoadError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err(dir))? {
        let path = entry.map_err(io_err(dir))?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut catalog = MessageCatalog::new();
    let mut origins: HashMap<String, PathBuf> = HashMap::new();
    for path in paths {
        let Some(format) = DictionaryFormat::from_path(&path) else {
            debug!(path = %path.display(), "skipping non-dictionary file");
            continue;
        };
        let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
            debug!(path = %path.display(), "skipping file without a usable locale name");
            continue;
        };
        let locale = locale.to_string();
        if let Some(first) = origins.get(&locale) {
            return Err(CatalogLoadError::DuplicateLocale {
                locale,
                first: first.clone(),
                second: path,
            });
        }
        let contents = std::fs::read_to_string(&path).map_err(io_err(&path))?;
        let dictionary =
            parse_dictionary(format, &contents).map_err(|message| CatalogLoadError::Parse {
                path: path.clone(),
                format,
                message,
            })?;
        debug!(locale = %locale, entries = dictionary.len(), "loaded dictionary");
        catalog.insert_dictionary(locale.clone(), dictionary);
        origins.insert(locale, path);
    }

    if catalog.is_empty() {
        return Err(CatalogLoadError::Empty {
            dir: dir.to_path_buf(),
        });
    }
    info!(
        dir = %dir.display(),
        locales = catalog.len(),
        "message catalog loaded"
    );
    Ok(catalog)
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogLoadError {
    let path = path.to_path_buf();
    move |source| CatalogLoadError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_format_in_order() {
        let json = parse_dictionary(DictionaryFormat::Json, r#"{"b": "B", "a": "A {x}"}"#).unwrap();
        assert_eq!(json.keys().collect::<Vec<_>>(), vec!["b", "a"]);

        let toml = parse_dictionary(
            DictionaryFormat::Toml,
            "zeta = \"Z\"\nalpha = \"A\"\nmid = \"M\"\n",
        )
        .unwrap();
        assert_eq!(toml.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(toml.get("alpha").map(String::as_str), Some("A"));

        let yaml = parse_dictionary(
            DictionaryFormat::Yaml,
            "zeta: Z\nalpha: \"A {x}\"\nmid: M\n",
        )
        .unwrap();
        assert_eq!(yaml.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(yaml.get("alpha").map(String::as_str), Some("A {x}"));
    }

    #[test]
    fn rejects_nested_values() {
        let err = parse_dictionary(DictionaryFormat::Json, r#"{"a": {"nested": "x"}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            DictionaryFormat::from_path(Path::new("fr.yml")),
            Some(DictionaryFormat::Yaml)
        );
        assert_eq!(DictionaryFormat::from_path(Path::new("README.md")), None);
        assert_eq!(DictionaryFormat::from_path(Path::new("en")), None);
    }
}
