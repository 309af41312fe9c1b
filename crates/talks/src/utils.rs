use clap::Parser;
use dorset_talks_core::{
    find_config_file, get_xdg_data_dir, load_config, ConfigSource, CONFIG_FILE_NAME,
    DEFAULT_SITE_PORT,
};
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};
use log::LevelFilter;
use std::env;
use time::{
    format_description::well_known::Iso8601, macros::format_description, OffsetDateTime,
    UtcOffset,
};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid UTC offset \"{0}\", expected something like +01:00")]
    UtcOffset(String),
}

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "PHP Dorset talks - monthly talk listings and talk pages"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $DORSET_TALKS_CONFIG, ./talks.toml,
    /// $XDG_CONFIG_HOME/dorset-talks/talks.toml, /etc/dorset-talks/talks.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "DORSET_TALKS_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short = 'H', long, env = "DORSET_TALKS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "DORSET_TALKS_PORT")]
    pub port: Option<String>,

    /// Directory holding the talks SQLite database
    #[arg(short, long, env = "DORSET_TALKS_DATABASE_DIR")]
    pub database_dir: Option<String>,

    /// Directory served as the site root; talk slides are looked up here
    #[arg(short = 'r', long, env = "DORSET_TALKS_DOCUMENT_ROOT")]
    pub document_root: Option<String>,

    /// Fixed offset used to decide where months start, e.g. +01:00.
    /// Daylight saving is not followed: a UK site on +00:00 turns the
    /// month an hour late during BST.
    #[arg(short, long, env = "DORSET_TALKS_UTC_OFFSET")]
    pub utc_offset: Option<String>,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.host.clone().unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_SITE_PORT.to_string())
    }

    pub fn database_dir(&self) -> String {
        self.database_dir
            .clone()
            .unwrap_or_else(|| get_xdg_data_dir().to_string_lossy().to_string())
    }

    pub fn document_root(&self) -> String {
        self.document_root
            .clone()
            .unwrap_or_else(|| "./public".to_string())
    }

    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        match &self.utc_offset {
            Some(raw) => parse_utc_offset(raw),
            None => Ok(UtcOffset::UTC),
        }
    }

    /// Values set here win, `fallback` fills the gaps
    fn or(self, fallback: Cli) -> Cli {
        Cli {
            config: self.config,
            level: self.level.or(fallback.level),
            host: self.host.or(fallback.host),
            port: self.port.or(fallback.port),
            database_dir: self.database_dir.or(fallback.database_dir),
            document_root: self.document_root.or(fallback.document_root),
            utc_offset: self.utc_offset.or(fallback.utc_offset),
        }
    }
}

/// Parses `+HH:MM` / `-HH:MM`, or `Z` for UTC
pub fn parse_utc_offset(raw: &str) -> Result<UtcOffset, ConfigError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return Ok(UtcOffset::UTC);
    }
    UtcOffset::parse(
        raw,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]"),
    )
    .map_err(|_| ConfigError::UtcOffset(raw.to_string()))
}

/// Load configuration from CLI args, config file, and environment.
/// Also returns where the file layer came from so it can be logged once
/// the logger is up.
pub fn get_config_info() -> anyhow::Result<(Cli, ConfigSource)> {
    let cli_args = Cli::parse();

    let source = match cli_args.config {
        Some(ref path) => ConfigSource::File(path.into()),
        None => find_config_file("DORSET_TALKS_CONFIG", CONFIG_FILE_NAME),
    };

    let cli = merge_config_file(cli_args, &source)?;
    Ok((cli, source))
}

/// Layers `cli_args` over the config file; a file that can't be read or
/// parsed is an error rather than a silent fallback to defaults
pub fn merge_config_file(cli_args: Cli, source: &ConfigSource) -> anyhow::Result<Cli> {
    let file_config: Cli = load_config(source)?;
    // CLI args override file config (env vars are handled by clap)
    Ok(cli_args.or(file_config))
}

pub fn get_log_level(cli: &Cli) -> LevelFilter {
    let level_str = cli
        .level
        .clone()
        .or_else(|| env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    match level_str.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

pub fn setup_logger() -> Dispatch {
    let colors = ColoredLevelConfig::new()
        .trace(Color::White)
        .debug(Color::Cyan)
        .info(Color::Blue)
        .warn(Color::Yellow)
        .error(Color::Magenta);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}: {}",
                OffsetDateTime::now_utc()
                    .format(&Iso8601::DEFAULT)
                    .unwrap_or_default(),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .chain(std::io::stdout())
}
