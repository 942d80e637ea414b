use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Environment variable consulted when `--log-level` is not passed.
pub const LOG_LEVEL_ENV: &str = "PIESKOAPKA_LOG_LEVEL";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log level `{value}` in PIESKOAPKA_LOG_LEVEL")]
    InvalidLogLevel { value: String },
}

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "pieskoapka", version, about = "Keep a list of your favorite dogs")]
pub struct Cli {
    /// Start with an empty list instead of the sample dogs.
    #[arg(long)]
    pub no_seed: bool,

    /// Append diagnostic logs to this file.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum level written to the log file.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(ConfigError::InvalidLogLevel {
                value: other.to_string(),
            }),
        }
    }
}

/// Resolved startup settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub log_file: Option<PathBuf>,
    pub log_level: LogLevel,
    pub seed_sample_dogs: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: None,
            log_level: LogLevel::default(),
            seed_sample_dogs: true,
        }
    }
}

impl AppConfig {
    /// Merges parsed arguments with the value of [`LOG_LEVEL_ENV`].
    ///
    /// An explicit `--log-level` wins over the environment.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidLogLevel`] if the environment value is
    /// not a known level and no flag overrides it.
    pub fn resolve(cli: Cli, env_log_level: Option<&str>) -> Result<Self, ConfigError> {
        let log_level = match (cli.log_level, env_log_level) {
            (Some(level), _) => level,
            (None, Some(value)) => value.parse()?,
            (None, None) => LogLevel::default(),
        };

        Ok(Self {
            log_file: cli.log_file,
            log_level,
            seed_sample_dogs: !cli.no_seed,
        })
    }

    /// Reads arguments from the process and the level from the environment.
    ///
    /// # Errors
    /// See [`AppConfig::resolve`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_log_level = std::env::var(LOG_LEVEL_ENV).ok();

        Self::resolve(Cli::parse(), env_log_level.as_deref())
    }
}
