// src/random.rs
//! Cryptographically secure random bytes from the operating system

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::CryptoError;

/// Return exactly `n` bytes from the OS random source.
///
/// Fails with [`CryptoError::InsufficientEntropy`] when the source cannot fill
/// the whole buffer. Never retried here.
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>, CryptoError> {
    let mut buf = vec![0u8; n];
    fill_random(&mut buf)?;
    Ok(buf)
}

/// Fill `dst` in place — used where the destination is already a wrapped secret
pub(crate) fn fill_random(dst: &mut [u8]) -> Result<(), CryptoError> {
    let requested = dst.len();
    let mut rng = OsRng;
    rng.try_fill_bytes(dst).map_err(|err| {
        tracing::warn!(requested, error = %err, "OS random source failed");
        CryptoError::InsufficientEntropy { requested }
    })
}
