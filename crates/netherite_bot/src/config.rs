//! Bot settings: TOML file plus `NETHERITE_*` environment overrides.

use crate::BotResult;
use config::{Config, Environment, File};
use netherite_cache::CacheConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_prefix() -> String {
    "/".to_string()
}

fn default_api_base() -> String {
    "https://api.obsidion-dev.com/api/v1".to_string()
}

/// Runtime settings for the bot.
///
/// Loaded from an optional TOML file, then overlaid with environment
/// variables prefixed `NETHERITE_` (e.g. `NETHERITE_TOKEN`,
/// `NETHERITE_CACHE__MAX_SIZE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Discord bot token from the Discord Developer Portal.
    pub token: String,
    /// Command prefix.
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Base URL of the server-status API.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Lookup cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

impl Settings {
    /// Load settings.
    ///
    /// When `path` is given the file must exist; otherwise `netherite.toml`
    /// in the working directory is read if present. Environment variables
    /// win over file values, so a token can live outside the config file.
    pub fn load(path: Option<&Path>) -> BotResult<Self> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("netherite").required(false)),
        };
        let settings = builder
            .add_source(Environment::with_prefix("NETHERITE").separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_settings_fill_defaults() {
        let settings: Settings = toml::from_str(r#"token = "abc""#).unwrap();
        assert_eq!(settings.prefix, "/");
        assert!(settings.api_base.starts_with("https://"));
        assert!(*settings.cache.enabled());
    }

    #[test]
    fn file_values_override_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            token = "abc"
            prefix = "!"

            [cache]
            max_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(settings.prefix, "!");
        assert_eq!(*settings.cache.max_size(), 50);
    }
}
