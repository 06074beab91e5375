use lexicon_host::{boot, coverage_report};
use lexicon_i18n::Params;
use lexicon_tests::{clear_locale_env, fixture_config};
use serial_test::serial;

#[test]
#[serial]
fn every_fallback_message_resolves_in_every_locale() {
    unsafe { clear_locale_env() };
    let localization = boot(&fixture_config(Some("en"))).unwrap();
    let resolver = &localization.resolver;
    let locales: Vec<String> = resolver.catalog().locales().map(str::to_string).collect();
    assert_eq!(locales, vec!["de", "en", "es", "fr", "nl"]);

    for locale in &locales {
        localization.set_locale(locale).unwrap();
        for message in resolver.messages().iter() {
            assert_ne!(message.text(), message.id(), "{locale}: {}", message.id());
        }
    }
}

#[test]
#[serial]
fn partial_locales_fall_back_per_message() {
    unsafe { clear_locale_env() };
    let localization = boot(&fixture_config(Some("fr-FR"))).unwrap();
    let resolver = &localization.resolver;
    assert_eq!(resolver.current_locale(), "fr");

    let email = Params::new().with("email", "ana@example.com");
    assert_eq!(
        resolver.resolve("home_logged_in_email", Some(&email)),
        "Connecté en tant que ana@example.com"
    );
    assert_eq!(
        resolver.resolve("home_get_started_description", Some(&Params::new().with("file", "src/main.rs"))),
        "Edit src/main.rs to begin"
    );
    assert_eq!(
        resolver.resolve("home_integrations_any", Some(&Params::new().with("count", 0))),
        "Works with 0 integrations"
    );
    assert_eq!(resolver.resolve("home_subtitle_typo", None), "home_subtitle_typo");
}

#[test]
#[serial]
fn locale_switch_reaches_bound_messages_and_subscribers() {
    unsafe { clear_locale_env() };
    let localization = boot(&fixture_config(Some("nl"))).unwrap();
    let title = localization.resolver.message("home_title").unwrap().clone();
    let mut changes = localization.store.subscribe();
    assert_eq!(title.text(), "Welkom bij je starter");

    localization.set_locale("es").unwrap();
    assert!(changes.has_changed().unwrap());
    assert_eq!(changes.borrow_and_update().as_str(), "es");
    assert_eq!(title.text(), "Bienvenido a tu plantilla");
}

#[test]
#[serial]
fn environment_locale_is_honoured() {
    unsafe {
        clear_locale_env();
        std::env::set_var("LEXICON_LOCALE", "de_DE.UTF-8");
    }
    let localization = boot(&fixture_config(None));
    unsafe { clear_locale_env() };
    let localization = localization.unwrap();
    assert_eq!(localization.store.get(), "de");
    assert_eq!(localization.resolver.resolve("hello_world", None), "Hallo, Welt!");
}

#[test]
fn starter_catalog_coverage() {
    let catalog = lexicon_host::load_catalog_dir(&lexicon_tests::fixture_catalog_dir()).unwrap();
    let report = coverage_report(&catalog, "en").unwrap();
    assert_eq!(report.total, 10);
    assert!(!report.is_complete());
    let fr = report.locales.iter().find(|c| c.locale == "fr").unwrap();
    assert_eq!(fr.translated, 4);
    assert!(fr.extra.is_empty());
    assert!(fr.placeholder_mismatches.is_empty());
}
