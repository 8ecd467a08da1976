//! # Settings
//!
//! Settings are layered, later sources win:
//! 1. defaults
//! 2. `genident.config.toml` in the working directory, if present
//! 3. environment variables prefixed with `GENIDENT_`, nested keys separated by `__`
//!    (e.g. `GENIDENT_NAMING__PROFILE=python`)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File, FileFormat};
use genident::DEFAULT_PROFILE;
use serde::Deserialize;

use super::logger::LoggerSettings;

pub const CONFIG_FILE: &str = "genident.config.toml";
const ENV_PREFIX: &str = "GENIDENT";

#[derive(Deserialize, Debug, Clone)]
pub struct NamingSettings {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default)]
    pub profile_file: Option<PathBuf>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for NamingSettings {
    fn default() -> Self {
        NamingSettings {
            profile: default_profile(),
            profile_file: None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub logger: LoggerSettings,
    #[serde(default)]
    pub naming: NamingSettings,
}

pub fn read_settings() -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::new(CONFIG_FILE, FileFormat::Toml).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::logger::{LogFormat, LoggerLevel};

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_settings_use_defaults() {
        let settings = parse("");
        assert_eq!(settings.naming.profile, "go");
        assert!(settings.naming.profile_file.is_none());
        assert_eq!(settings.logger.level, LoggerLevel::Warn);
        assert_eq!(settings.logger.format, LogFormat::Text);
    }

    #[test]
    fn test_partial_settings() {
        let settings = parse(
            r#"
            [logger]
            level = "debug"
            format = "JSON"

            [naming]
            profile_file = "profiles/kotlin.toml"
            "#,
        );
        assert_eq!(settings.logger.level, LoggerLevel::Debug);
        assert_eq!(settings.logger.format, LogFormat::Json);
        assert_eq!(settings.naming.profile, "go");
        assert_eq!(
            settings.naming.profile_file,
            Some(PathBuf::from("profiles/kotlin.toml"))
        );
    }
}
