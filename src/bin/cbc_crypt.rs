// src/bin/cbc_crypt.rs
//! cbc-crypt — generate keys and encrypt/decrypt files with AES-CBC

use std::path::PathBuf;

use anyhow::{Context, Result};
use cbc_file_crypt::config::{self, Config};
use cbc_file_crypt::consts::DEFAULT_LOG_FILTER;
use cbc_file_crypt::{decrypt_file, encrypt_file, generate_keys, key_file, CoreError};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// AES-CBC file encryption with PKCS#7 padding
#[derive(Parser)]
#[command(name = "cbc-crypt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh key + IV and write them to a JSON key file
    Keygen {
        /// Key size in bytes: 16 (AES-128) or 32 (AES-256); defaults to the config value
        #[arg(short, long)]
        strength: Option<usize>,
        /// Where to write the key file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Encrypt a file
    Encrypt {
        /// Key file produced by `keygen`
        #[arg(short, long)]
        key: PathBuf,
        input: PathBuf,
        output: PathBuf,
    },

    /// Decrypt a file
    Decrypt {
        /// Key file produced by `keygen`
        #[arg(short, long)]
        key: PathBuf,
        input: PathBuf,
        output: PathBuf,
    },
}

/// Read the config file without logging, so the subscriber can use its filter.
///
/// Returns the failure alongside the defaults; it is reported once logging is up.
fn read_config() -> (Config, Option<(PathBuf, CoreError)>) {
    let Some(path) = config::config_path().filter(|p| p.exists()) else {
        return (Config::default(), None);
    };
    match config::load_from(&path) {
        Ok(conf) => (conf, None),
        Err(err) => (Config::default(), Some((path, err))),
    }
}

fn main() -> Result<()> {
    let (config, config_error) = read_config();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.logging.filter))
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    if let Some((path, err)) = config_error {
        warn!(path = %path.display(), error = %err, "invalid config — using built-in defaults");
    }

    let cli = Cli::parse();
    let chunk_size = config.crypto.chunk_size;

    match cli.command {
        Commands::Keygen { strength, out } => {
            let strength = strength.unwrap_or_else(|| config.key_strength().key_len());
            let material = generate_keys(strength)
                .with_context(|| format!("Failed to generate a {strength}-byte key"))?;
            key_file::save(&out, &material)
                .with_context(|| format!("Failed to write key file {}", out.display()))?;
            info!("Generated AES-{} key → {}", strength * 8, out.display());
        }
        Commands::Encrypt { key, input, output } => {
            let material = key_file::load(&key)
                .with_context(|| format!("Failed to load key file {}", key.display()))?;
            let report = encrypt_file(&input, &output, &material.key, &material.iv, chunk_size)
                .with_context(|| format!("Failed to encrypt {}", input.display()))?;
            info!(
                "Encrypted {} bytes → {} ({} bytes, blake3 {})",
                report.plaintext_size,
                output.display(),
                report.ciphertext_size,
                report.ciphertext_blake3
            );
        }
        Commands::Decrypt { key, input, output } => {
            let material = key_file::load(&key)
                .with_context(|| format!("Failed to load key file {}", key.display()))?;
            let report = decrypt_file(&input, &output, &material.key, &material.iv, chunk_size)
                .with_context(|| format!("Failed to decrypt {}", input.display()))?;
            info!(
                "Decrypted {} → {} ({} bytes)",
                input.display(),
                output.display(),
                report.plaintext_size
            );
        }
    }

    Ok(())
}
