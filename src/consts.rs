// src/consts.rs
//! Shared constants — cipher parameters and defaults

/// AES block size in bytes, identical for every key size
pub const AES_BLOCK_SIZE: usize = 16;

/// Bytes of randomness hashed to derive one key or IV
pub const KEY_SEED_LEN: usize = 64;

/// Default key strength in bytes (AES-256)
pub const DEFAULT_KEY_STRENGTH: usize = 32;

/// Default chunk size for file streaming — must stay a multiple of `AES_BLOCK_SIZE`
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Default tracing filter for the CLI
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Format tag written into exported key files
pub const KEY_FILE_FORMAT: &str = "cbc-file-crypt-key-v1";

/// Env var pointing at an alternative config file
pub const CONFIG_ENV_VAR: &str = "CBC_CRYPT_CONFIG";

/// Largest accepted chunk size for file streaming (64 MiB)
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;
