// src/aliases.rs
//! secure-gate wrappers for every secret the crate holds
//!
//! Keys, IVs and seed material are zeroized on drop.

use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(Key16, 16); // AES-128 key
fixed_alias!(Key32, 32); // AES-256 key
fixed_alias!(Iv16, 16); // CBC initialization vector
fixed_alias!(SeedBlock64, 64); // raw randomness fed to SHA-256 during key derivation
fixed_alias!(SeedDigest32, 32); // SHA-256 of a seed block, truncated into a key or IV

// Heap secrets
dynamic_alias!(SecretBytes, Vec<u8>); // decoded key bytes from a key file
dynamic_alias!(SecretHex, String); // hex-encoded key, and key file JSON holding it
