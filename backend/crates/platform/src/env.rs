//! Environment Variable Utilities
//!
//! Typed reads of process environment variables with defaults.
//! An unset or empty variable means "use the default"; a present but
//! unparsable one is an error naming the variable.

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Error when an environment variable holds an unusable value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// Read a variable, treating unset and empty as `None`
pub fn var_opt(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

/// Read and parse a variable, falling back to `default` when unset
///
/// ## Examples
/// ```rust
/// let port: u16 = platform::env::var_or("PLATFORM_DOCTEST_UNSET_PORT", 5000).unwrap();
/// assert_eq!(port, 5000);
/// ```
pub fn var_or<T>(key: &str, default: T) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_or(key, var_opt(key), default)
}

/// Read a comma-separated list; blank entries are skipped
pub fn var_list(key: &str) -> Vec<String> {
    split_list(var_opt(key).as_deref())
}

/// Parse an already-read raw value
///
/// Split out from [`var_or`] so callers (and tests) can supply values
/// without touching the process environment.
pub fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> Result<T, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(raw) {
        None => Ok(default),
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(EnvError::Invalid {
                key: key.to_string(),
                reason: e.to_string(),
                value,
            }),
        },
    }
}

/// Split a comma-separated value into trimmed, non-empty entries
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_when_unset() {
        let port: u16 = parse_or("PORT", None, 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_parse_or_default_when_empty() {
        let port: u16 = parse_or("PORT", Some(String::new()), 5000).unwrap();
        assert_eq!(port, 5000);
    }

    #[test]
    fn test_parse_or_value() {
        let port: u16 = parse_or("PORT", Some(" 8080 ".to_string()), 5000).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_or_invalid_names_key() {
        let result: Result<u16, _> = parse_or("PORT", Some("http".to_string()), 5000);
        let err = result.unwrap_err();
        assert!(matches!(&err, EnvError::Invalid { key, value, .. } if key == "PORT" && value == "http"));
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list(Some("http://a.test, http://b.test,,")),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(split_list(Some(" , ")).is_empty());
        assert!(split_list(None).is_empty());
    }
}
