use anyhow::{Context, Result};
use tracing::Level;

/// The environment variable holding the log level, e.g. `PODSCRAPER_LOG=debug`.
pub const LOG_ENV: &str = "PODSCRAPER_LOG";

/// The level used when [`LOG_ENV`] is unset or unreadable.
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// The log level requested through [`LOG_ENV`], falling back to [`DEFAULT_LEVEL`].
pub fn level_from_env() -> Level {
    let value = std::env::var(LOG_ENV).ok();

    parse_level(value.as_deref()).unwrap_or_else(|err| {
        eprintln!("{err:#}, using {DEFAULT_LEVEL}");
        DEFAULT_LEVEL
    })
}

/// Parse a level name such as `warn` or `TRACE`. A missing or blank value is the default.
pub fn parse_level(value: Option<&str>) -> Result<Level> {
    match value.map(str::trim) {
        None | Some("") => Ok(DEFAULT_LEVEL),
        Some(value) => value
            .parse::<Level>()
            .with_context(|| format!("invalid {LOG_ENV} value {value:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info() {
        assert_eq!(parse_level(None).unwrap(), Level::INFO);
        assert_eq!(parse_level(Some("  ")).unwrap(), Level::INFO);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(parse_level(Some("debug")).unwrap(), Level::DEBUG);
        assert_eq!(parse_level(Some("WARN")).unwrap(), Level::WARN);
        assert_eq!(parse_level(Some(" trace ")).unwrap(), Level::TRACE);
    }

    #[test]
    fn garbage_is_an_error() {
        let err = parse_level(Some("loud")).unwrap_err();
        assert!(format!("{err:#}").contains(r#"invalid PODSCRAPER_LOG value "loud""#));
    }
}
