// src/key_file.rs
//! Export/import of key material as a small JSON document
//!
//! SECURITY WARNING: the file holds the key in cleartext hex.
//! Protect it like the data it unlocks.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::aliases::{SecretBytes, SecretHex};
use crate::consts::KEY_FILE_FORMAT;
use crate::error::{CoreError, Result};
use crate::key_ops::{iv_from_slice, KeyMaterial, SymmetricKey};

// Borrowed on both sides: the key hex lives only inside a `SecretHex`
#[derive(Serialize, Deserialize)]
struct KeyFileDoc<'a> {
    format: &'a str,
    created_at: &'a str,
    strength: usize,
    key_hex: &'a str,
    iv_hex: &'a str,
}

/// Serialize key material to a pretty-printed JSON string.
///
/// The returned string contains the key; it is zeroized when dropped.
pub fn to_json(material: &KeyMaterial) -> Result<SecretHex> {
    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let key_hex = SecretHex::new(hex::encode(material.key.expose_secret()));
    let iv_hex = hex::encode(material.iv.expose_secret());
    let doc = KeyFileDoc {
        format: KEY_FILE_FORMAT,
        created_at: &created_at,
        strength: material.key.strength().key_len(),
        key_hex: key_hex.expose_secret(),
        iv_hex: &iv_hex,
    };
    Ok(SecretHex::new(serde_json::to_string_pretty(&doc)?))
}

/// Parse and validate a key document produced by [`to_json`]
pub fn from_json(json: &str) -> Result<KeyMaterial> {
    let doc: KeyFileDoc<'_> = serde_json::from_str(json)?;
    if doc.format != KEY_FILE_FORMAT {
        return Err(CoreError::KeyFile(format!(
            "unsupported format {:?}",
            doc.format
        )));
    }
    DateTime::parse_from_rfc3339(doc.created_at)
        .map_err(|err| CoreError::KeyFile(format!("bad created_at: {err}")))?;

    let key_bytes = SecretBytes::new(
        hex::decode(doc.key_hex)
            .map_err(|err| CoreError::KeyFile(format!("bad key_hex: {err}")))?,
    );
    let iv_bytes = hex::decode(doc.iv_hex)
        .map_err(|err| CoreError::KeyFile(format!("bad iv_hex: {err}")))?;

    let key = SymmetricKey::from_slice(key_bytes.expose_secret())?;
    if key.strength().key_len() != doc.strength {
        return Err(CoreError::KeyFile(format!(
            "strength {} does not match a {}-byte key",
            doc.strength,
            key_bytes.expose_secret().len()
        )));
    }
    let iv = iv_from_slice(&iv_bytes)?;
    Ok(KeyMaterial { key, iv })
}

/// Write key material to `path`
pub fn save<P: AsRef<Path>>(path: P, material: &KeyMaterial) -> Result<()> {
    let json = to_json(material)?;
    std::fs::write(path.as_ref(), json.expose_secret())?;
    tracing::info!(path = %path.as_ref().display(), "wrote key file");
    Ok(())
}

/// Read key material from `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<KeyMaterial> {
    let json = SecretHex::new(std::fs::read_to_string(path.as_ref())?);
    from_json(json.expose_secret())
}
