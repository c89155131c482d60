//! Environment variable overrides, applied on top of the config file

use crate::{Config, ConfigError, ConfigResult};
use mockshelf_core::RuntimeMode;

/// Public origin for cover image URLs
pub const ENV_BASE_URL: &str = "BASE_URL";
/// `development`, `test` or `production`
pub const ENV_MODE: &str = "MOCKSHELF_MODE";
/// Listener address, e.g. `127.0.0.1:9000`
pub const ENV_BIND: &str = "MOCKSHELF_BIND";
/// SQLite path or `:memory:`
pub const ENV_DATABASE: &str = "MOCKSHELF_DATABASE";

/// Applies every override that `lookup` yields a non-empty value for
///
/// Returns the names of the variables that were applied.
pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<Vec<&'static str>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut applied = Vec::new();
    let get = |name: &'static str| {
        lookup(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(value) = get(ENV_BASE_URL) {
        config.server.base_url = value;
        applied.push(ENV_BASE_URL);
    }

    if let Some(value) = get(ENV_MODE) {
        config.api.mode = value
            .parse::<RuntimeMode>()
            .map_err(|e| ConfigError::EnvOverride {
                var: ENV_MODE,
                message: e.to_string(),
            })?;
        applied.push(ENV_MODE);
    }

    if let Some(value) = get(ENV_BIND) {
        config.server.bind_addr = value;
        applied.push(ENV_BIND);
    }

    if let Some(value) = get(ENV_DATABASE) {
        config.database.path = value;
        applied.push(ENV_DATABASE);
    }

    for name in &applied {
        log::debug!("Config override from environment: {}", name);
    }
    Ok(applied)
}
