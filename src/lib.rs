// src/lib.rs
//! cbc-file-crypt — AES-CBC encryption with PKCS#7 padding
//!
//! Features:
//! - AES-128 / AES-256 key + IV generation (SHA-256 over OS randomness)
//! - One-shot and progressive (streaming) CBC encryption/decryption
//! - Chunked file encryption in bounded memory
//! - JSON key files and TOML configuration
//!
//! Confidentiality only: there is no MAC. Integrity belongs to a layer above.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod file_ops;
pub mod key_file;
pub mod key_ops;
pub mod padding;
pub mod random;
pub mod util;

// Re-export everything users need at the crate root
pub use aliases::{Iv16, Key16, Key32};
pub use config::load as load_config;
pub use crypto::{decrypt_once, encrypt_once, DecryptStream, EncryptStream};
pub use error::{CoreError, CryptoError, Result as CoreResult};
pub use file_ops::{decrypt_file, encrypt_file, FileReport};
pub use key_ops::{generate_keys, KeyMaterial, KeyStrength, SymmetricKey};
pub use padding::{pad, unpad};
pub use random::generate_random_bytes;
