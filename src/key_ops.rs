// src/key_ops.rs
//! Key/IV generation and representation utilities
//!
//! Keys and IVs are derived by hashing 64 bytes of OS randomness with SHA-256
//! and truncating the digest. Drawing the bytes directly would be at least as
//! strong; the hash step is kept so generated material matches what existing
//! deployments produce.

use std::fmt;

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use sha2::digest::Output;
use sha2::{Digest, Sha256};

use crate::aliases::{Iv16, Key16, Key32, SeedBlock64, SeedDigest32};
use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;
use crate::random::fill_random;

/// Supported AES key sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrength {
    Aes128,
    Aes256,
}

impl KeyStrength {
    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            KeyStrength::Aes128 => 16,
            KeyStrength::Aes256 => 32,
        }
    }
}

impl TryFrom<usize> for KeyStrength {
    type Error = CryptoError;

    fn try_from(strength: usize) -> Result<Self, Self::Error> {
        match strength {
            16 => Ok(KeyStrength::Aes128),
            32 => Ok(KeyStrength::Aes256),
            other => Err(CryptoError::InvalidKeySize(other)),
        }
    }
}

/// AES key of either supported size. Zeroized on drop.
pub enum SymmetricKey {
    Aes128(Key16),
    Aes256(Key32),
}

impl SymmetricKey {
    /// Wrap raw key bytes, rejecting anything that is not 16 or 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            // copy straight into the wrapper so no loose stack copy survives
            16 => {
                let mut key = Key16::new([0u8; 16]);
                key.expose_secret_mut().copy_from_slice(bytes);
                Ok(SymmetricKey::Aes128(key))
            }
            32 => {
                let mut key = Key32::new([0u8; 32]);
                key.expose_secret_mut().copy_from_slice(bytes);
                Ok(SymmetricKey::Aes256(key))
            }
            other => Err(CryptoError::InvalidKeyLength(other)),
        }
    }

    pub fn strength(&self) -> KeyStrength {
        match self {
            SymmetricKey::Aes128(_) => KeyStrength::Aes128,
            SymmetricKey::Aes256(_) => KeyStrength::Aes256,
        }
    }

    pub fn expose_secret(&self) -> &[u8] {
        match self {
            SymmetricKey::Aes128(key) => key.expose_secret(),
            SymmetricKey::Aes256(key) => key.expose_secret(),
        }
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey::{:?}([REDACTED])", self.strength())
    }
}

/// A key and the IV paired with it for one CBC context
pub struct KeyMaterial {
    pub key: SymmetricKey,
    pub iv: Iv16,
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("key", &self.key)
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Wrap raw IV bytes, rejecting anything that is not one AES block long
pub fn iv_from_slice(bytes: &[u8]) -> Result<Iv16, CryptoError> {
    if bytes.len() != AES_BLOCK_SIZE {
        return Err(CryptoError::InvalidIvLength(bytes.len()));
    }
    let mut iv = Iv16::new([0u8; AES_BLOCK_SIZE]);
    iv.expose_secret_mut().copy_from_slice(bytes);
    Ok(iv)
}

/// SHA-256 over 64 fresh random bytes, written straight into a zeroizing buffer
fn hashed_seed() -> Result<SeedDigest32, CryptoError> {
    let mut seed = SeedBlock64::new([0u8; 64]);
    fill_random(seed.expose_secret_mut())?;

    let mut digest = SeedDigest32::new([0u8; 32]);
    let mut hasher = Sha256::new();
    hasher.update(seed.expose_secret());
    hasher.finalize_into(Output::<Sha256>::from_mut_slice(digest.expose_secret_mut()));
    Ok(digest)
}

/// Generate a fresh AES key of `strength` bytes (16 or 32) plus a 16-byte IV.
///
/// Any other strength is rejected with [`CryptoError::InvalidKeySize`] before
/// randomness is consumed.
pub fn generate_keys(strength: usize) -> Result<KeyMaterial, CryptoError> {
    let strength = KeyStrength::try_from(strength)?;

    let key_digest = hashed_seed()?;
    let key = SymmetricKey::from_slice(&key_digest.expose_secret()[..strength.key_len()])?;

    let iv_digest = hashed_seed()?;
    let iv = iv_from_slice(&iv_digest.expose_secret()[..AES_BLOCK_SIZE])?;

    tracing::debug!(strength = strength.key_len(), "generated AES key material");
    Ok(KeyMaterial { key, iv })
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &SymmetricKey) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_accepts_only_16_and_32() {
        assert_eq!(KeyStrength::try_from(16), Ok(KeyStrength::Aes128));
        assert_eq!(KeyStrength::try_from(32), Ok(KeyStrength::Aes256));
        for bad in [0, 8, 15, 24, 33, 64] {
            assert_eq!(
                KeyStrength::try_from(bad),
                Err(CryptoError::InvalidKeySize(bad))
            );
        }
    }

    #[test]
    fn from_slice_rejects_bad_lengths() {
        assert!(matches!(
            SymmetricKey::from_slice(&[0u8; 24]),
            Err(CryptoError::InvalidKeyLength(24))
        ));
        assert_eq!(
            SymmetricKey::from_slice(&[7u8; 16]).unwrap().strength(),
            KeyStrength::Aes128
        );
    }

    #[test]
    fn iv_from_slice_requires_one_block() {
        assert!(iv_from_slice(&[0u8; 16]).is_ok());
        assert_eq!(
            iv_from_slice(&[0u8; 12]).err(),
            Some(CryptoError::InvalidIvLength(12))
        );
    }

    #[test]
    fn from_slice_keeps_exact_bytes() {
        let bytes: Vec<u8> = (0..32).collect();
        let key = SymmetricKey::from_slice(&bytes).unwrap();
        assert_eq!(key.expose_secret(), bytes.as_slice());
    }

    #[test]
    fn hashed_seed_fills_the_whole_digest() {
        let a = hashed_seed().unwrap();
        let b = hashed_seed().unwrap();
        assert_ne!(a.expose_secret(), &[0u8; 32]);
        assert_ne!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn debug_output_hides_key_bytes() {
        let key = SymmetricKey::from_slice(&[0xAB; 32]).unwrap();
        let shown = format!("{key:?}");
        assert!(shown.contains("REDACTED"));
        assert!(!shown.to_lowercase().contains("ab, ab"));
    }
}
