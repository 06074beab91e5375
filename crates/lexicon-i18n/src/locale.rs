/// Reduces an environment-style locale (`en_US.UTF-8`, `fr-CA`, `de_DE@euro`)
/// to its lowercase primary language subtag. Empty input yields `default`.
pub fn normalize_locale(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    let stripped = trimmed
        .split(['.', '@'])
        .next()
        .unwrap_or(trimmed)
        .replace('_', "-")
        .to_ascii_lowercase();
    match stripped.split('-').next() {
        Some(primary) if !primary.is_empty() => primary.to_string(),
        _ => default.to_string(),
    }
}

/// Picks the first non-empty source in priority order (CLI, explicit
/// setting, environment, system) and normalizes it.
pub fn select_locale_with_sources(
    cli_locale: Option<&str>,
    explicit: Option<&str>,
    env_locale: Option<&str>,
    system_locale: Option<&str>,
    default: &str,
) -> String {
    [cli_locale, explicit, env_locale, system_locale]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(|value| normalize_locale(value, default))
        .unwrap_or_else(|| default.to_string())
}
