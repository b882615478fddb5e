use std::path::PathBuf;

use anyhow::{ensure, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_SUBMISSIONS: usize = 10_000;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file of externally computed `[x, y]` pairs, one per catalog career.
    pub career_positions_path: Option<PathBuf>,
    /// Capacity of the in-memory submission store.
    pub max_submissions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            career_positions_path: None,
            max_submissions: DEFAULT_MAX_SUBMISSIONS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_or(optional_env("PORT"), DEFAULT_PORT)
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            career_positions_path: optional_env("CAREER_POSITIONS_PATH").map(PathBuf::from),
            max_submissions: parse_capacity(optional_env("MAX_SUBMISSIONS"))?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_capacity(raw: Option<String>) -> Result<usize> {
    let capacity = parse_or(raw, DEFAULT_MAX_SUBMISSIONS)
        .context("MAX_SUBMISSIONS must be a positive integer")?;
    ensure!(capacity > 0, "MAX_SUBMISSIONS must be at least 1");
    Ok(capacity)
}

fn parse_or<T>(raw: Option<String>, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => Ok(value.trim().parse::<T>()?),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_uses_default_when_unset() {
        assert_eq!(parse_or::<u16>(None, 8080).unwrap(), 8080);
    }

    #[test]
    fn test_parse_or_trims_value() {
        assert_eq!(parse_or::<u16>(Some(" 3000 ".into()), 8080).unwrap(), 3000);
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert_eq!(parse_capacity(None).unwrap(), DEFAULT_MAX_SUBMISSIONS);
        assert_eq!(parse_capacity(Some("25".into())).unwrap(), 25);
        assert!(parse_capacity(Some("0".into())).is_err());
        assert!(parse_capacity(Some("-3".into())).is_err());
    }

    #[test]
    fn test_parse_or_rejects_garbage() {
        assert!(parse_or::<u16>(Some("eighty".into()), 8080).is_err());
        assert!(parse_or::<u16>(Some("70000".into()), 8080).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_submissions, 10_000);
        assert!(config.career_positions_path.is_none());
    }
}
