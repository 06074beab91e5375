use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use lexicon_host::{I18nConfig, boot, coverage_report};
use lexicon_i18n::Params;

#[derive(Debug, Parser)]
#[command(name = "lexicon", version, about = "Resolve and inspect localized message catalogs")]
pub struct Cli {
    /// Optional lexicon config file (toml/json).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding one `<locale>.{json,toml,yaml}` dictionary per locale.
    #[arg(long = "catalog", value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Locale whose dictionary defines every message identifier.
    #[arg(long = "fallback", value_name = "LOCALE")]
    pub fallback: Option<String>,

    /// Locale to resolve in (defaults to LEXICON_LOCALE / system locale).
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the resolved message for an identifier.
    Resolve {
        id: String,
        /// Placeholder value (repeatable).
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
        /// Placeholder substituted by an empty value (repeatable).
        #[arg(long = "null", value_name = "KEY")]
        nulls: Vec<String>,
    },
    /// List every message identifier of the fallback dictionary.
    Keys,
    /// List loaded locales.
    Locales,
    /// Report missing, unknown and mismatched translations.
    Check {
        /// Exit non-zero when any locale is incomplete.
        #[arg(long)]
        strict: bool,
    },
}

/// What a command printed and whether the process should exit successfully.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    let Some((key, value)) = raw.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got `{raw}`"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

pub fn build_params(params: &[(String, String)], nulls: &[String]) -> Params {
    let mut bag: Params = params.iter().map(|(k, v)| (k.as_str(), v)).collect();
    for key in nulls {
        bag.insert_null(key.as_str());
    }
    bag
}

/// Config file (if any), then command-line overrides.
pub fn load_config(cli: &Cli) -> Result<I18nConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => I18nConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => I18nConfig::default(),
    };
    if let Some(dir) = &cli.catalog {
        config = config.with_catalog_dir(dir);
    }
    if let Some(fallback) = &cli.fallback {
        config = config.with_fallback_locale(fallback);
    }
    Ok(config.with_locale(cli.locale.clone()))
}

pub fn execute(cli: &Cli) -> Result<Outcome> {
    let config = load_config(cli)?;
    let localization = boot(&config)
        .with_context(|| format!("loading catalog from {}", config.catalog_dir.display()))?;
    let resolver = &localization.resolver;
    match &cli.command {
        Command::Resolve { id, params, nulls } => {
            let params = build_params(params, nulls);
            Ok(Outcome::ok(format!("{}\n", resolver.resolve(id, Some(&params)))))
        }
        Command::Keys => {
            let mut output = String::new();
            for id in resolver.messages().ids() {
                writeln!(output, "{id}")?;
            }
            Ok(Outcome::ok(output))
        }
        Command::Locales => {
            let mut output = String::new();
            for locale in resolver.catalog().locales() {
                let marker = if locale == resolver.fallback_locale() {
                    " (fallback)"
                } else {
                    ""
                };
                writeln!(output, "{locale}{marker}")?;
            }
            Ok(Outcome::ok(output))
        }
        Command::Check { strict } => {
            let Some(report) = coverage_report(resolver.catalog(), resolver.fallback_locale())
            else {
                bail!("fallback locale `{}` vanished from catalog", resolver.fallback_locale());
            };
            Ok(Outcome {
                output: report.to_string(),
                success: !strict || report.is_complete(),
            })
        }
    }
}
