//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Board web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Whether to populate the store with the sample board.
    pub seed_sample: bool,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `BOARD_ADDR` | Server bind address | `127.0.0.1:5000` |
    /// | `BOARD_SEED_SAMPLE` | Seed sample leads (`true`/`false`/`1`/`0`) | `true` |
    /// | `BOARD_STATIC_DIR` | Static asset directory | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("BOARD_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let seed_sample = match env::var("BOARD_SEED_SAMPLE") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidSeedFlag(value))?,
            Err(_) => true,
        };

        let static_dir = env::var("BOARD_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            addr,
            seed_sample,
            static_dir,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid BOARD_ADDR format")]
    InvalidAddr,

    #[error("Invalid BOARD_SEED_SAMPLE value: {0}")]
    InvalidSeedFlag(String),
}
