//! Mockshelf configuration
//!
//! The config file is TOML with one table per section. Each section
//! implements [`ConfigSection`], so adding a section means adding a field to
//! [`Config`] and wiring it into `validate`.
//!
//! Precedence: defaults < file < environment < command line.
//!
//! A relative `server.static_dir` is taken from the directory holding the
//! config file (see [`Config::static_root`]). The catalog's cover images are
//! not bundled: a deployment copies them into `<static_dir>/images/`, named
//! after each book's cover file (`clean-code.jpg` and so on). Missing files
//! answer 404.
//!
//! ```toml
//! [server]
//! bind_addr = "0.0.0.0:8080"
//! base_url = "http://localhost:8080"
//!
//! [database]
//! path = "mockshelf.db"
//!
//! [api]
//! mode = "production"
//! ```

mod api_config;
mod database_config;
pub mod env;
mod error;
mod persistence;
mod server_config;
mod validation;

pub use api_config::ApiConfig;
pub use database_config::DatabaseSection;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use persistence::ConfigPersistence;
pub use server_config::{LogLevel, ServerConfig};
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub api: ApiConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, applies environment overrides and validates the result
    ///
    /// A missing file is not an error; the defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Like [`Config::load`], reading overrides through `lookup`
    pub fn load_with<F>(path: impl AsRef<Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigPersistence::new(path.as_ref()).load()?;
        env::apply_overrides(&mut config, lookup)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Validates every section, returning all problems found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.version > CONFIG_VERSION {
            errors.push(ValidationError::with_value(
                "version",
                format!("newer than supported version {}", CONFIG_VERSION),
                self.version,
            ));
        }

        collect_section(&self.server, &mut errors);
        collect_section(&self.database, &mut errors);
        collect_section(&self.api, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Directory to serve under `/static`
    ///
    /// Absolute paths are used as given; relative ones are joined to the
    /// directory of `config_path`.
    pub fn static_root(&self, config_path: impl AsRef<Path>) -> PathBuf {
        let dir = &self.server.static_dir;
        if dir.is_absolute() {
            return dir.clone();
        }
        match config_path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(dir),
            _ => dir.clone(),
        }
    }

    /// Renders the config as a TOML document
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn collect_section<S: ConfigSection>(section: &S, errors: &mut Vec<ValidationError>) {
    if let Err(mut e) = section.validate() {
        log::debug!(
            "Config section [{}] has {} invalid field(s)",
            section.section_name(),
            e.len()
        );
        errors.append(&mut e);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            server: ServerConfig::default(),
            database: DatabaseSection::default(),
            api: ApiConfig::default(),
        }
    }
}
