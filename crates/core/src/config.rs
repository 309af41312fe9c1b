//! Configuration file discovery and loading
//!
//! CLI arguments and environment variables are layered on top of the file
//! by the binary; this module only finds and parses the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::APP_NAME;

/// Where the configuration comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No config file found, built-in defaults apply
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ConfigSource::File(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(p) => write!(f, "{}", p.display()),
            ConfigSource::Defaults => write!(f, "(defaults)"),
        }
    }
}

/// Find a configuration file, first match wins:
/// `$env_var`, `./filename`, `$XDG_CONFIG_HOME/dorset-talks/filename`
/// (or `~/.config/...`), `/etc/dorset-talks/filename`
pub fn find_config_file(env_var: &str, filename: &str) -> ConfigSource {
    let candidates = [
        env::var(env_var).ok().map(PathBuf::from),
        Some(PathBuf::from(filename)),
        Some(xdg_config_path(filename)),
        Some(PathBuf::from("/etc").join(APP_NAME).join(filename)),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|path| path.exists())
        .map_or(ConfigSource::Defaults, ConfigSource::File)
}

fn xdg_config_path(filename: &str) -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| PathBuf::from(".config"));
    base.join(APP_NAME).join(filename)
}

/// Default home for the talks database
pub fn get_xdg_data_dir() -> PathBuf {
    let base = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|_| PathBuf::from(".local/share"));
    base.join(APP_NAME)
}

/// Parses the TOML file behind `source`, `T::default()` for
/// [`ConfigSource::Defaults`]. Unreadable or malformed files are errors.
pub fn load_config<T: DeserializeOwned + Default>(source: &ConfigSource) -> anyhow::Result<T> {
    match source {
        ConfigSource::File(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("invalid config file {}", path.display()))
        }
        ConfigSource::Defaults => Ok(T::default()),
    }
}
