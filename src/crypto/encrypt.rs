// src/crypto/encrypt.rs
use crate::aliases::Iv16;
use crate::key_ops::SymmetricKey;
use crate::padding::pad_aes_block;

use super::engine::CbcEncryptor;

/// Encrypt plaintext → PKCS#7-padded AES-CBC ciphertext (in-memory)
///
/// Deterministic for a given (key, iv, plaintext). The output is always a
/// non-empty multiple of 16 bytes, one block longer than the plaintext when
/// the plaintext is already block aligned.
pub fn encrypt_once(key: &SymmetricKey, iv: &Iv16, plaintext: &[u8]) -> Vec<u8> {
    let mut buf = pad_aes_block(plaintext);
    CbcEncryptor::new(key, iv).encrypt_blocks(&mut buf);
    buf
}
