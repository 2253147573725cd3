// src/crypto/mod.rs
//! Pure cryptographic operations — no I/O
//!
//! AES-CBC with PKCS#7 padding over in-memory buffers, one-shot or streamed.
//! Confidentiality only: nothing here detects tampering beyond broken padding.
mod decrypt;
mod encrypt;
mod engine;
mod stream;

pub use decrypt::decrypt_once;
pub use encrypt::encrypt_once;
pub use stream::{DecryptStream, EncryptStream};
