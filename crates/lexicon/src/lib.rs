//! `lexicon` command-line front end and re-exports of the library crates.

pub mod cli;

pub use lexicon_host as host;
pub use lexicon_i18n as i18n;
