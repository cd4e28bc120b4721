use log::Level;
use once_cell::sync::Lazy;

const DEFAULT_LOG_LEVEL: Level = Level::Info;

static BASE_URL: Lazy<Option<String>> =
    Lazy::new(|| normalize_base(option_env!("POETRY_BASE_URL").unwrap_or("/")));

/// Path prefix the app is served under, `None` when served from the domain root.
pub fn base_url() -> Option<&'static str> {
    BASE_URL.as_deref()
}

/// Normalizes a configured base to a leading slash with no trailing slash.
pub fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Path relative to the base, as the route table sees it.
pub fn strip_base<'a>(base: Option<&str>, path: &'a str) -> &'a str {
    let Some(base) = base else {
        return path;
    };
    match path.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

pub fn log_level() -> Level {
    option_env!("POETRY_LOG_LEVEL")
        .and_then(parse_log_level)
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Configured log level that failed to parse, reported once logging is up.
pub fn rejected_log_level() -> Option<&'static str> {
    option_env!("POETRY_LOG_LEVEL").filter(|raw| parse_log_level(raw).is_none())
}

pub fn parse_log_level(raw: &str) -> Option<Level> {
    raw.trim().parse().ok()
}
