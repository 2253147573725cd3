// src/config/mod.rs
//! Configuration system for cbc-file-crypt
//!
//! Central, lazy-loaded global config from TOML with an env override for the path.

pub use app::{
    config_path, load, load_from, load_or_default, Config, CryptoSettings, LoggingSettings,
};

mod app;
mod defaults;
