//! Application configuration
//!
//! Values come from the process environment, after an optional `.env` file
//! in the working directory has been loaded.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::sessions::DEFAULT_SESSION_CAPACITY;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid LOG_LEVEL '{0}' (expected DEBUG, INFO, WARNING, ERROR or CRITICAL)")]
    InvalidLogLevel(String),

    #[error("Invalid APP_HOST '{0}'")]
    InvalidHost(String),

    #[error("Invalid APP_PORT '{0}'")]
    InvalidPort(String),

    #[error("Invalid APP_SESSION_CAPACITY '{0}' (expected a positive integer)")]
    InvalidSessionCapacity(String),

    #[error("Failed to load .env file: {0}")]
    EnvFile(String),
}

/// Log verbosity accepted in `LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`.
    ///
    /// tracing has no level above error, so CRITICAL shares it.
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" => Ok(LogLevel::Critical),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub host: IpAddr,
    pub port: u16,
    /// Sessions whose active conversation is remembered at once
    pub session_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            session_capacity: DEFAULT_SESSION_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        check_env_file(dotenvy::dotenv().map(|_| ()))?;
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to defaults; present but unparsable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };

        let host_value = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_value
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_value.clone()))?;

        let port = match lookup("APP_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => DEFAULT_PORT,
        };

        let session_capacity = match lookup("APP_SESSION_CAPACITY") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or_else(|| ConfigError::InvalidSessionCapacity(value.clone()))?,
            None => DEFAULT_SESSION_CAPACITY,
        };

        Ok(Self {
            log_level,
            host,
            port,
            session_capacity,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// A missing `.env` is fine; one that exists but cannot be read or parsed is not.
fn check_env_file(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(ConfigError::EnvFile(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5001");
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" Critical ".parse::<LogLevel>().unwrap(), LogLevel::Critical);
        assert_eq!(
            "TRACE".parse::<LogLevel>(),
            Err(ConfigError::InvalidLogLevel("TRACE".to_string()))
        );
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Warning.as_filter(), "warn");
        assert_eq!(LogLevel::Critical.as_filter(), "error");
        assert_eq!(LogLevel::default().as_filter(), "info");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "ERROR"),
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[("APP_PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));

        let err = AppConfig::from_lookup(lookup_from(&[("APP_HOST", "localhost:80")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(_)));

        let err = AppConfig::from_lookup(lookup_from(&[("LOG_LEVEL", "loud")])).unwrap_err();
        assert!(err.to_string().contains("loud"));

        let err =
            AppConfig::from_lookup(lookup_from(&[("APP_SESSION_CAPACITY", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSessionCapacity("0".to_string()));
    }

    #[test]
    fn test_session_capacity() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("APP_SESSION_CAPACITY", "250")])).unwrap();
        assert_eq!(config.session_capacity, 250);
        assert_eq!(
            AppConfig::default().session_capacity,
            DEFAULT_SESSION_CAPACITY
        );
    }

    #[test]
    fn test_missing_env_file_is_ignored() {
        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(check_env_file(Err(missing)), Ok(()));
        assert_eq!(check_env_file(Ok(())), Ok(()));
    }

    #[test]
    fn test_malformed_env_file_is_an_error() {
        let malformed = dotenvy::Error::LineParse("LOG_LEVEL INFO".to_string(), 9);
        assert!(matches!(
            check_env_file(Err(malformed)),
            Err(ConfigError::EnvFile(_))
        ));

        let denied = dotenvy::Error::Io(std::io::Error::from(
            std::io::ErrorKind::PermissionDenied,
        ));
        assert!(matches!(
            check_env_file(Err(denied)),
            Err(ConfigError::EnvFile(_))
        ));
    }
}
