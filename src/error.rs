// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Failures of the cipher core: randomness, key setup, padding and streaming discipline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("random source could not supply {requested} bytes")]
    InsufficientEntropy { requested: usize },

    #[error("AES key strength must be 16 or 32 bytes, got {0}")]
    InvalidKeySize(usize),

    #[error("AES key must be 16 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("IV must be 16 bytes, got {0}")]
    InvalidIvLength(usize),

    #[error("data must be in 16 bytes blocks, got {0} bytes")]
    UnalignedInput(usize),

    #[error("ciphertext must be a non-empty multiple of 16 bytes, got {0} bytes")]
    InvalidCiphertextLength(usize),

    #[error("cannot finish a stream with empty data")]
    EmptyFinalBlock,

    #[error("padding block size must be between 1 and 255 bytes, got {0}")]
    InvalidBlockSize(usize),

    #[error("invalid padding (wrong key/IV or corrupted ciphertext)")]
    InvalidPadding,

    #[error("stream session already finalized")]
    SessionFinalized,
}

/// Crate-wide error for file, config and key-file operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Crypto operation failed: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    ConfigValue(String),

    #[error("Key file JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key file: {0}")]
    KeyFile(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
