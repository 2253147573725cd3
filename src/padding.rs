// src/padding.rs
//! PKCS#5/PKCS#7 block padding
//!
//! Padding is always added, so a block-aligned input grows by a full block.
//! Unpadding checks every pad byte, not only the trailing length byte, and
//! accepts a buffer made of padding alone (the encryption of empty input).

use crate::consts::AES_BLOCK_SIZE;
use crate::error::CryptoError;

/// Largest block size whose pad length still fits in one byte
pub const MAX_PAD_BLOCK_SIZE: usize = u8::MAX as usize;

fn check_block_size(block_size: usize) -> Result<u8, CryptoError> {
    u8::try_from(block_size)
        .ok()
        .filter(|&size| size != 0)
        .ok_or(CryptoError::InvalidBlockSize(block_size))
}

/// Number of pad bytes `pad` appends to `len` bytes of data, in `1..=block_size`
#[inline]
pub fn padding_len(len: usize, block_size: usize) -> Result<usize, CryptoError> {
    let block_size = usize::from(check_block_size(block_size)?);
    Ok(block_size - (len % block_size))
}

/// Append `block_size - len % block_size` copies of that value to `data`.
///
/// Fails with [`CryptoError::InvalidBlockSize`] unless `block_size` is in
/// `1..=255`.
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, CryptoError> {
    Ok(pad_to(data, check_block_size(block_size)?))
}

/// [`pad`] to the AES block size, which is always valid
pub(crate) fn pad_aes_block(data: &[u8]) -> Vec<u8> {
    pad_to(data, AES_BLOCK_SIZE as u8)
}

fn pad_to(data: &[u8], block_size: u8) -> Vec<u8> {
    let pad_len = block_size - (data.len() % usize::from(block_size)) as u8;
    let mut out = Vec::with_capacity(data.len() + usize::from(pad_len));
    out.extend_from_slice(data);
    out.resize(data.len() + usize::from(pad_len), pad_len);
    out
}

/// Strip padding from a decrypted buffer, returning the plaintext slice.
///
/// Fails with [`CryptoError::InvalidBlockSize`] for the same block sizes
/// [`pad`] rejects, and with [`CryptoError::InvalidPadding`] when the buffer
/// is empty, the length byte is zero, larger than `block_size` or larger than
/// the buffer, or any pad byte differs from the length byte.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8], CryptoError> {
    check_block_size(block_size)?;
    let Some(&last) = data.last() else {
        return Err(CryptoError::InvalidPadding);
    };
    let pad_len = last as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        return Err(CryptoError::InvalidPadding);
    }

    let (plain, padding) = data.split_at(data.len() - pad_len);
    // fold over every byte so the check does not stop at the first mismatch
    let mismatch = padding.iter().fold(0u8, |acc, &b| acc | (b ^ last));
    if mismatch != 0 {
        return Err(CryptoError::InvalidPadding);
    }
    Ok(plain)
}
