//! Catalog coverage against the fallback dictionary.

use std::collections::BTreeSet;
use std::fmt;

use lexicon_i18n::MessageCatalog;
use lexicon_i18n::template::placeholders;

/// Findings for one non-fallback locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocaleCoverage {
    pub locale: String,
    pub translated: usize,
    /// Fallback identifiers with no entry in this locale.
    pub missing: Vec<String>,
    /// Identifiers this locale defines that the fallback does not.
    pub extra: Vec<String>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl LocaleCoverage {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.placeholder_mismatches.is_empty()
    }
}

/// A translation whose placeholder names differ from the fallback template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderMismatch {
    pub id: String,
    pub expected: Vec<String>,
    pub found: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageReport {
    pub fallback_locale: String,
    pub total: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}

/// Compares every locale with the fallback. Returns `None` when the fallback
/// locale is not in the catalog.
pub fn coverage_report(catalog: &MessageCatalog, fallback_locale: &str) -> Option<CoverageReport> {
    let fallback = catalog.dictionary(fallback_locale)?;
    let locales = catalog
        .iter()
        .filter(|(locale, _)| *locale != fallback_locale)
        .map(|(locale, dictionary)| {
            let mut coverage = LocaleCoverage {
                locale: locale.to_string(),
                ..LocaleCoverage::default()
            };
            for (id, expected) in fallback {
                let Some(found) = dictionary.get(id) else {
                    coverage.missing.push(id.clone());
                    continue;
                };
                coverage.translated += 1;
                let expected_names = placeholder_set(expected);
                let found_names = placeholder_set(found);
                if expected_names != found_names {
                    coverage.placeholder_mismatches.push(PlaceholderMismatch {
                        id: id.clone(),
                        expected: expected_names.into_iter().collect(),
                        found: found_names.into_iter().collect(),
                    });
                }
            }
            coverage.extra = dictionary
                .keys()
                .filter(|id| !fallback.contains_key(*id))
                .cloned()
                .collect();
            coverage
        })
        .collect();
    Some(CoverageReport {
        fallback_locale: fallback_locale.to_string(),
        total: fallback.len(),
        locales,
    })
}

fn placeholder_set(template: &str) -> BTreeSet<String> {
    placeholders(template).into_iter().map(str::to_string).collect()
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "fallback `{}`: {} messages",
            self.fallback_locale, self.total
        )?;
        for locale in &self.locales {
            let status = if locale.is_complete() { "ok" } else { "incomplete" };
            writeln!(
                f,
                "{}: {}/{} translated ({status})",
                locale.locale, locale.translated, self.total
            )?;
            for id in &locale.missing {
                writeln!(f, "  missing: {id}")?;
            }
            for id in &locale.extra {
                writeln!(f, "  unknown: {id}")?;
            }
            for mismatch in &locale.placeholder_mismatches {
                writeln!(
                    f,
                    "  placeholders differ: {} (expected [{}], found [{}])",
                    mismatch.id,
                    mismatch.expected.join(", "),
                    mismatch.found.join(", ")
                )?;
            }
        }
        Ok(())
    }
}
