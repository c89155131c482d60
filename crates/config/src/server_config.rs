//! Listener, public URL and static asset settings

use crate::validation::{ConfigSection, ValidationError, Validator};
use mockshelf_core::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log level used when `RUST_LOG` is not set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Public origin used to build cover image URLs
    pub base_url: String,

    /// Directory served under `/static`, relative to the config file
    ///
    /// Cover images go in its `images/` subdirectory.
    pub static_dir: PathBuf,

    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            static_dir: PathBuf::from("static"),
            log_level: LogLevel::Info,
        }
    }
}

impl ConfigSection for ServerConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut results = vec![
            Validator::socket_addr(&self.bind_addr, "server.bind_addr"),
            Validator::http_url(&self.base_url, "server.base_url"),
        ];

        if self.static_dir.as_os_str().is_empty() {
            results.push(Err(ValidationError::new(
                "server.static_dir",
                "must not be empty",
            )));
        }

        Validator::collect_errors(results)
    }

    fn section_name(&self) -> &'static str {
        "server"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_reports_every_bad_field() {
        let config = ServerConfig {
            bind_addr: "nowhere".to_string(),
            base_url: "localhost".to_string(),
            static_dir: PathBuf::new(),
            log_level: LogLevel::Debug,
        };

        let errors = config.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["server.bind_addr", "server.base_url", "server.static_dir"]
        );
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        let parsed: ServerConfig = toml::from_str("log_level = \"trace\"").unwrap();
        assert_eq!(parsed.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_log_level_filters() {
        assert_eq!(LogLevel::Error.to_level_filter(), log::LevelFilter::Error);
        assert_eq!(LogLevel::Info.to_level_filter(), log::LevelFilter::Info);
        assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
        assert!(LogLevel::Warn.to_level_filter() < LogLevel::Debug.to_level_filter());
    }
}
