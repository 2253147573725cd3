// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;

use super::defaults::*;
use crate::consts::CONFIG_ENV_VAR;
use crate::error::Result;
use crate::file_ops::check_chunk_size;
use crate::key_ops::KeyStrength;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_crypto")]
    pub crypto: CryptoSettings,
    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CryptoSettings {
    /// Key size in bytes for newly generated keys: 16 or 32
    pub key_strength: usize,
    /// Read size for file streaming, a multiple of 16
    pub chunk_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            crypto: default_crypto(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        KeyStrength::try_from(self.crypto.key_strength)?;
        check_chunk_size(self.crypto.chunk_size)
    }

    pub fn key_strength(&self) -> KeyStrength {
        // validated on load; fall back to AES-256 for hand-built configs
        KeyStrength::try_from(self.crypto.key_strength).unwrap_or(KeyStrength::Aes256)
    }
}

/// Parse and validate a TOML config file. Does not touch the global config.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let conf: Config = toml::from_str(&content)?;
    conf.validate()?;
    Ok(conf)
}

/// `$CBC_CRYPT_CONFIG`, else `<config dir>/cbc-file-crypt/config.toml`
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join("cbc-file-crypt").join("config.toml")),
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load `path` if it exists, falling back to defaults when it is missing or invalid
pub fn load_or_default(path: Option<&Path>) -> Config {
    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!("no config file found — using built-in defaults");
        return Config::default();
    };

    match load_from(path) {
        Ok(conf) => {
            tracing::debug!(path = %path.display(), "loaded config");
            conf
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid config — using built-in defaults");
            Config::default()
        }
    }
}

/// Load config once per process — falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| load_or_default(config_path().as_deref()))
}
