// src/crypto/decrypt.rs
use crate::aliases::Iv16;
use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;
use crate::key_ops::SymmetricKey;
use crate::padding::unpad;

use super::engine::CbcDecryptor;

/// Decrypt AES-CBC ciphertext → plaintext (in-memory)
///
/// The ciphertext must be a non-empty multiple of 16 bytes. A wrong key, a
/// wrong IV and corrupted data all surface as [`CryptoError::InvalidPadding`]
/// when they break the padding; they cannot be told apart.
pub fn decrypt_once(
    key: &SymmetricKey,
    iv: &Iv16,
    ciphertext: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_SIZE != 0 {
        return Err(CryptoError::InvalidCiphertextLength(ciphertext.len()));
    }

    let mut buf = ciphertext.to_vec();
    CbcDecryptor::new(key, iv).decrypt_blocks(&mut buf);

    let plain_len = unpad(&buf, AES_BLOCK_SIZE)?.len();
    buf.truncate(plain_len);
    Ok(buf)
}
