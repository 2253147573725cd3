// src/config/defaults.rs
use crate::config::app::{CryptoSettings, LoggingSettings};
use crate::consts::{DEFAULT_CHUNK_SIZE, DEFAULT_KEY_STRENGTH, DEFAULT_LOG_FILTER};

pub fn default_crypto() -> CryptoSettings {
    CryptoSettings {
        key_strength: DEFAULT_KEY_STRENGTH,
        chunk_size: DEFAULT_CHUNK_SIZE,
    }
}

pub fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
