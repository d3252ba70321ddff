use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use alien_logging::{FileConfig, LogConfig};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port the service has always listened on.
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Server configuration, loadable from TOML.
///
/// ```toml
/// bind = "0.0.0.0:8000"
///
/// [log]
/// default_level = "debug"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub log: LogConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            log: LogConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config file named on the command line (if any), then apply
    /// the flags that were given on top of it.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        };

        if let Some(bind) = cli.bind {
            config.bind = bind;
        }
        if let Some(level) = &cli.log_level {
            config.log.default_level = level.clone();
        }
        if let Some(format) = cli.log_format {
            config.log.console.pretty = format == LogFormat::Pretty;
        }
        if let Some(dir) = &cli.log_dir {
            let file = config.log.file.get_or_insert_with(FileConfig::default);
            file.directory = dir.clone();
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per line
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "alien-api",
    version,
    about = "Read-only HTTP lookups over the alien species catalog"
)]
pub struct Cli {
    /// Address to listen on (default 127.0.0.1:8000)
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error); RUST_LOG wins if set
    #[arg(long)]
    pub log_level: Option<String>,
    /// Console log format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
    /// Also write JSONL logs to this directory, rotated daily
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}
