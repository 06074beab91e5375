use std::fs;
use std::path::Path;

use clap::Parser;
use lexicon::cli::{Cli, execute};

fn catalog_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("en.json"),
        r#"{"hello_world": "Hello, world!", "count": "Count: {n}", "greeting": "Hello {name}"}"#,
    )
    .unwrap();
    fs::write(
        dir.path().join("fr.toml"),
        "hello_world = \"Bonjour !\"\ngreeting = \"Salut {prenom}\"\n",
    )
    .unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> lexicon::cli::Outcome {
    let mut argv = vec!["lexicon", "--catalog", dir.to_str().unwrap(), "--fallback", "en"];
    argv.extend_from_slice(args);
    execute(&Cli::try_parse_from(argv).unwrap()).unwrap()
}

#[test]
fn resolve_uses_locale_then_fallback() {
    let dir = catalog_dir();
    assert_eq!(
        run(dir.path(), &["--locale", "fr", "resolve", "hello_world"]).output,
        "Bonjour !\n"
    );
    assert_eq!(
        run(dir.path(), &["--locale", "fr", "resolve", "count", "--param", "n=0"]).output,
        "Count: 0\n"
    );
    assert_eq!(
        run(dir.path(), &["--locale", "fr", "resolve", "count", "--null", "n"]).output,
        "Count: \n"
    );
    assert_eq!(
        run(dir.path(), &["--locale", "fr", "resolve", "nope"]).output,
        "nope\n"
    );
}

#[test]
fn keys_and_locales_listings() {
    let dir = catalog_dir();
    assert_eq!(run(dir.path(), &["keys"]).output, "hello_world\ncount\ngreeting\n");
    assert_eq!(run(dir.path(), &["locales"]).output, "en (fallback)\nfr\n");
}

#[test]
fn strict_check_fails_on_incomplete_locale() {
    let dir = catalog_dir();
    let lenient = run(dir.path(), &["check"]);
    assert!(lenient.success);
    assert!(lenient.output.contains("fr: 2/3 translated (incomplete)"));
    assert!(lenient.output.contains("  missing: count"));
    assert!(lenient.output.contains("placeholders differ: greeting"));

    let strict = run(dir.path(), &["check", "--strict"]);
    assert!(!strict.success);
}

#[test]
fn unknown_fallback_is_an_error() {
    let dir = catalog_dir();
    let cli = Cli::try_parse_from([
        "lexicon",
        "--catalog",
        dir.path().to_str().unwrap(),
        "--fallback",
        "de",
        "keys",
    ])
    .unwrap();
    let err = execute(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("fallback locale `de`"));
}
