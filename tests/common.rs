// tests/common.rs
//! Shared test utilities — logging setup and fixed key material

use cbc_file_crypt::key_ops::iv_from_slice;
use cbc_file_crypt::{Iv16, SymmetricKey};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

/// Key/IV from hex — panics on malformed fixtures
#[allow(dead_code)]
pub fn key_iv(key_hex: &str, iv_hex: &str) -> (SymmetricKey, Iv16) {
    let key = SymmetricKey::from_slice(&hex::decode(key_hex).unwrap()).unwrap();
    let iv = iv_from_slice(&hex::decode(iv_hex).unwrap()).unwrap();
    (key, iv)
}

/// Deterministic, non-repeating test payload
#[allow(dead_code)]
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
