// src/crypto/stream.rs
//! Progressive (multi-call) AES-CBC sessions
//!
//! A session owns its chaining state. Intermediate calls take block-aligned
//! data and produce ciphertext immediately; the closing call pads the tail.
//! Once closed, a session rejects every further call with
//! [`CryptoError::SessionFinalized`].
//!
//! Sessions are `Send` but take `&mut self`: one writer at a time.

use crate::aliases::Iv16;
use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;
use crate::key_ops::{iv_from_slice, SymmetricKey};
use crate::padding::{pad_aes_block, unpad};

use super::engine::{CbcDecryptor, CbcEncryptor};

enum EncryptState {
    Open(CbcEncryptor),
    Finalized,
}

/// Streaming encryption session
///
/// `continue_stream` (any number of times) → `finish` (exactly once). The
/// concatenated output equals [`encrypt_once`](super::encrypt_once) over the
/// concatenated input.
pub struct EncryptStream {
    state: EncryptState,
    bytes_in: u64,
}

impl EncryptStream {
    /// Begin a CBC chain for `key`/`iv`
    pub fn open(key: &SymmetricKey, iv: &Iv16) -> Self {
        tracing::debug!(strength = key.strength().key_len(), "opened encrypt stream");
        Self {
            state: EncryptState::Open(CbcEncryptor::new(key, iv)),
            bytes_in: 0,
        }
    }

    /// Like [`open`](Self::open) but from raw bytes, surfacing key/IV length errors
    pub fn open_from_slices(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        let key = SymmetricKey::from_slice(key)?;
        let iv = iv_from_slice(iv)?;
        Ok(Self::open(&key, &iv))
    }

    /// Encrypt a block-aligned chunk, continuing the chain. No padding is added.
    pub fn continue_stream(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let EncryptState::Open(encryptor) = &mut self.state else {
            return Err(CryptoError::SessionFinalized);
        };
        if data.len() % AES_BLOCK_SIZE != 0 {
            return Err(CryptoError::UnalignedInput(data.len()));
        }

        let mut out = data.to_vec();
        encryptor.encrypt_blocks(&mut out);
        self.bytes_in += data.len() as u64;
        Ok(out)
    }

    /// Pad and encrypt the non-empty tail, then close the session
    pub fn finish(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if self.is_finalized() {
            return Err(CryptoError::SessionFinalized);
        }
        if data.is_empty() {
            return Err(CryptoError::EmptyFinalBlock);
        }

        let EncryptState::Open(mut encryptor) =
            std::mem::replace(&mut self.state, EncryptState::Finalized)
        else {
            return Err(CryptoError::SessionFinalized);
        };

        let mut out = pad_aes_block(data);
        encryptor.encrypt_blocks(&mut out);
        self.bytes_in += data.len() as u64;

        tracing::debug!(plaintext_bytes = self.bytes_in, "finished encrypt stream");
        Ok(out)
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, EncryptState::Finalized)
    }
}

enum DecryptState {
    Open {
        decryptor: CbcDecryptor,
        // ciphertext not yet released: partial blocks plus the last full block
        pending: Vec<u8>,
    },
    Finalized,
}

/// Streaming decryption session
///
/// Accepts ciphertext in chunks of any length. The last full block is always
/// held back because it carries the padding; [`finish`](Self::finish) checks
/// that exactly one block remains, decrypts it and strips the padding.
pub struct DecryptStream {
    state: DecryptState,
    bytes_in: u64,
}

impl DecryptStream {
    pub fn open(key: &SymmetricKey, iv: &Iv16) -> Self {
        tracing::debug!(strength = key.strength().key_len(), "opened decrypt stream");
        Self {
            state: DecryptState::Open {
                decryptor: CbcDecryptor::new(key, iv),
                pending: Vec::with_capacity(2 * AES_BLOCK_SIZE),
            },
            bytes_in: 0,
        }
    }

    pub fn open_from_slices(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        let key = SymmetricKey::from_slice(key)?;
        let iv = iv_from_slice(iv)?;
        Ok(Self::open(&key, &iv))
    }

    /// Feed ciphertext, returning whatever plaintext can be released safely
    pub fn update(&mut self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let DecryptState::Open { decryptor, pending } = &mut self.state else {
            return Err(CryptoError::SessionFinalized);
        };
        pending.extend_from_slice(data);
        self.bytes_in += data.len() as u64;

        let full = pending.len() - pending.len() % AES_BLOCK_SIZE;
        let ready = if full == pending.len() {
            full.saturating_sub(AES_BLOCK_SIZE)
        } else {
            full
        };

        let mut out: Vec<u8> = pending.drain(..ready).collect();
        decryptor.decrypt_blocks(&mut out);
        Ok(out)
    }

    /// Decrypt the held-back block, strip padding and close the session.
    ///
    /// The session is closed even when this fails.
    pub fn finish(&mut self) -> Result<Vec<u8>, CryptoError> {
        let DecryptState::Open {
            mut decryptor,
            mut pending,
        } = std::mem::replace(&mut self.state, DecryptState::Finalized)
        else {
            return Err(CryptoError::SessionFinalized);
        };

        if pending.len() != AES_BLOCK_SIZE {
            let total = usize::try_from(self.bytes_in).unwrap_or(usize::MAX);
            return Err(CryptoError::InvalidCiphertextLength(total));
        }

        decryptor.decrypt_blocks(&mut pending);
        let plain_len = unpad(&pending, AES_BLOCK_SIZE)?.len();
        pending.truncate(plain_len);

        tracing::debug!(ciphertext_bytes = self.bytes_in, "finished decrypt stream");
        Ok(pending)
    }

    pub fn is_finalized(&self) -> bool {
        matches!(self.state, DecryptState::Finalized)
    }
}
