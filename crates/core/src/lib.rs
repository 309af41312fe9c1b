//! Dorset Talks Core Library
//!
//! Shared utilities for the talks site:
//! - Configuration loading (XDG-compliant)
//! - File system utilities

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::{create_dir_all, is_directory, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "dorset-talks";

/// Default site port
pub const DEFAULT_SITE_PORT: u16 = 8080;

/// Default config filename
pub const CONFIG_FILE_NAME: &str = "talks.toml";
