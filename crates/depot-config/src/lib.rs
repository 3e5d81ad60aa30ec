//! Configuration shared by the depot CLI and TUI.
//!
//! A TOML file of named backend profiles plus `DEPOT_`-prefixed
//! environment overrides, layered through figment. The CLI puts
//! flag-level overrides on top of whatever resolves here.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level shape of the config file.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named on the command line.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

/// The `[defaults]` section: values a profile can override.
#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "Defaults::output")]
    pub output: String,

    #[serde(default = "Defaults::color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "Defaults::timeout")]
    pub timeout: u64,
}

impl Defaults {
    fn output() -> String {
        "table".into()
    }
    fn color() -> String {
        "auto".into()
    }
    fn timeout() -> u64 {
        30
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: Self::output(),
            color: Self::color(),
            timeout: Self::timeout(),
        }
    }
}

/// One named backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Back-office root URL (e.g., "http://localhost:8080").
    pub api_url: String,

    /// Per-profile timeout override in seconds.
    pub timeout: Option<u64>,
}

/// Where the config file lives: platform config dir, with a
/// `~/.config/depot` fallback when the platform dirs are unavailable.
pub fn config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("dev", "depot", "depot") {
        return dirs.config_dir().join("config.toml");
    }
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(".config").join("depot").join("config.toml")
}

/// Load from the canonical path plus environment.
pub fn load() -> Result<Config, ConfigError> {
    load_from(&config_path())
}

/// Load from a specific file plus environment. Environment variables use
/// the `DEPOT_` prefix with `_`-separated nesting
/// (`DEPOT_DEFAULTS_OUTPUT=json`).
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DEPOT_").split("_"))
        .extract()?;
    Ok(config)
}

/// Load, falling back to the built-in defaults when the file is missing
/// or unreadable.
pub fn load_or_default() -> Config {
    load().unwrap_or_default()
}

/// Connection settings resolved from a profile.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_url: String,
    pub timeout: Duration,
}

impl ApiSettings {
    /// Build settings from one profile, validating the URL early so both
    /// binaries fail with the same message.
    pub fn for_profile(profile: &Profile, default_timeout: u64) -> Result<Self, ConfigError> {
        url::Url::parse(&profile.api_url).map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", profile.api_url),
        })?;

        Ok(Self {
            api_url: profile.api_url.clone(),
            timeout: Duration::from_secs(profile.timeout.unwrap_or(default_timeout)),
        })
    }
}

/// Resolve a profile by explicit name, falling back to the configured
/// default.
pub fn resolve_profile(config: &Config, name: Option<&str>) -> Result<ApiSettings, ConfigError> {
    let profile_name = name
        .or(config.default_profile.as_deref())
        .unwrap_or("default");

    let profile = config
        .profiles
        .get(profile_name)
        .ok_or_else(|| ConfigError::UnknownProfile {
            profile: profile_name.to_owned(),
        })?;

    ApiSettings::for_profile(profile, config.defaults.timeout)
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown profile '{profile}'")]
    UnknownProfile { profile: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}
