// src/crypto/engine.rs
//! AES-CBC block-mode engine shared by the one-shot and streaming paths
//!
//! Both wrappers carry the CBC chaining value internally, so feeding a buffer
//! in several block-aligned pieces yields the same output as one call.

use aes::{Aes128, Aes256};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::aliases::Iv16;
use crate::consts::AES_BLOCK_SIZE;
use crate::key_ops::SymmetricKey;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

pub(crate) enum CbcEncryptor {
    Aes128(Aes128CbcEnc),
    Aes256(Aes256CbcEnc),
}

impl CbcEncryptor {
    pub(crate) fn new(key: &SymmetricKey, iv: &Iv16) -> Self {
        let iv = iv.expose_secret();
        match key {
            SymmetricKey::Aes128(k) => {
                Self::Aes128(Aes128CbcEnc::new(k.expose_secret().into(), iv.into()))
            }
            SymmetricKey::Aes256(k) => {
                Self::Aes256(Aes256CbcEnc::new(k.expose_secret().into(), iv.into()))
            }
        }
    }

    /// Encrypt `buf` in place, continuing the chain. `buf` must be block aligned.
    pub(crate) fn encrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % AES_BLOCK_SIZE, 0);
        for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            let block = aes::Block::from_mut_slice(chunk);
            match self {
                Self::Aes128(enc) => enc.encrypt_block_mut(block),
                Self::Aes256(enc) => enc.encrypt_block_mut(block),
            }
        }
    }
}

pub(crate) enum CbcDecryptor {
    Aes128(Aes128CbcDec),
    Aes256(Aes256CbcDec),
}

impl CbcDecryptor {
    pub(crate) fn new(key: &SymmetricKey, iv: &Iv16) -> Self {
        let iv = iv.expose_secret();
        match key {
            SymmetricKey::Aes128(k) => {
                Self::Aes128(Aes128CbcDec::new(k.expose_secret().into(), iv.into()))
            }
            SymmetricKey::Aes256(k) => {
                Self::Aes256(Aes256CbcDec::new(k.expose_secret().into(), iv.into()))
            }
        }
    }

    /// Decrypt `buf` in place, continuing the chain. `buf` must be block aligned.
    pub(crate) fn decrypt_blocks(&mut self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len() % AES_BLOCK_SIZE, 0);
        for chunk in buf.chunks_exact_mut(AES_BLOCK_SIZE) {
            let block = aes::Block::from_mut_slice(chunk);
            match self {
                Self::Aes128(dec) => dec.decrypt_block_mut(block),
                Self::Aes256(dec) => dec.decrypt_block_mut(block),
            }
        }
    }
}
