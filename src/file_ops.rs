// src/file_ops.rs
//! File-level encryption/decryption operations
//!
//! Files are processed in bounded chunks through the streaming sessions, so
//! memory use does not grow with file size. The output is one ordinary
//! PKCS#7-padded AES-CBC message, byte-identical to `encrypt_once` over the
//! whole file.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use blake3::Hasher;
use tempfile::NamedTempFile;

use crate::aliases::Iv16;
use crate::consts::{AES_BLOCK_SIZE, MAX_CHUNK_SIZE};
use crate::crypto::{encrypt_once, DecryptStream, EncryptStream};
use crate::error::{CoreError, Result};
use crate::key_ops::SymmetricKey;
use crate::util::finalize_hex;

/// Sizes and ciphertext fingerprint of a processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub plaintext_size: u64,
    pub ciphertext_size: u64,
    pub ciphertext_blake3: String,
}

/// Non-zero multiple of the AES block size, at most [`MAX_CHUNK_SIZE`]
pub(crate) fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 || chunk_size % AES_BLOCK_SIZE != 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(CoreError::ConfigValue(format!(
            "chunk_size must be a non-zero multiple of {AES_BLOCK_SIZE} up to {MAX_CHUNK_SIZE}, got {chunk_size}"
        )));
    }
    Ok(())
}

/// Read up to `chunk_size` bytes, short only at end of input
fn read_chunk<R: Read>(reader: &mut R, chunk_size: usize) -> io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(chunk_size);
    reader.by_ref().take(chunk_size as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Run `body` against a temp file beside `output`, then rename it into place.
///
/// `output` is only replaced when `body` succeeds; on error the temp file is
/// dropped and whatever was at `output` stays as it was.
fn write_via_temp<F>(output: &Path, body: F) -> Result<FileReport>
where
    F: FnOnce(BufWriter<&mut File>) -> Result<FileReport>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)?;
    let report = body(BufWriter::new(temp.as_file_mut()))?;
    temp.persist(output).map_err(|err| err.error)?;
    Ok(report)
}

/// Encrypt a file on disk, streaming it in `chunk_size` pieces
///
/// `output` may name the input file itself.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &SymmetricKey,
    iv: &Iv16,
    chunk_size: usize,
) -> Result<FileReport> {
    check_chunk_size(chunk_size)?;
    let mut reader = BufReader::new(File::open(input_path.as_ref())?);
    let output = output_path.as_ref();

    let report = write_via_temp(output, |writer| {
        let report = encrypt_stream(&mut reader, writer, key, iv, chunk_size);
        // close the input before the rename may replace it
        drop(reader);
        report
    })?;
    tracing::debug!(
        path = %output.display(),
        plaintext_size = report.plaintext_size,
        ciphertext_size = report.ciphertext_size,
        "encrypted file"
    );
    Ok(report)
}

fn encrypt_stream<R: Read, W: Write>(
    reader: &mut R,
    mut writer: W,
    key: &SymmetricKey,
    iv: &Iv16,
    chunk_size: usize,
) -> Result<FileReport> {
    let mut hasher = Hasher::new();
    let mut plaintext_size = 0u64;
    let mut ciphertext_size = 0u64;
    let mut emit = |ct: &[u8], writer: &mut W| -> io::Result<()> {
        hasher.update(ct);
        ciphertext_size += ct.len() as u64;
        writer.write_all(ct)
    };

    let mut current = read_chunk(reader, chunk_size)?;
    if current.is_empty() {
        // nothing to stream: a lone padding block
        emit(&encrypt_once(key, iv, &[]), &mut writer)?;
    } else {
        let mut stream = EncryptStream::open(key, iv);
        loop {
            plaintext_size += current.len() as u64;
            let next = read_chunk(reader, chunk_size)?;
            if next.is_empty() {
                // the tail is never empty here, so finish always has data
                emit(&stream.finish(&current)?, &mut writer)?;
                break;
            }
            emit(&stream.continue_stream(&current)?, &mut writer)?;
            current = next;
        }
    }
    writer.flush()?;

    Ok(FileReport {
        plaintext_size,
        ciphertext_size,
        ciphertext_blake3: finalize_hex(&hasher),
    })
}

/// Decrypt a file produced by [`encrypt_file`] (or any PKCS#7 AES-CBC ciphertext)
///
/// Plaintext is only moved to `output` after the padding checks out, so a
/// wrong key or a damaged file never replaces an existing `output`.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    key: &SymmetricKey,
    iv: &Iv16,
    chunk_size: usize,
) -> Result<FileReport> {
    check_chunk_size(chunk_size)?;
    let mut reader = BufReader::new(File::open(input_path.as_ref())?);
    let output = output_path.as_ref();

    let report = write_via_temp(output, |writer| {
        let report = decrypt_stream(&mut reader, writer, key, iv, chunk_size);
        drop(reader);
        report
    })?;
    tracing::debug!(
        path = %output.display(),
        plaintext_size = report.plaintext_size,
        "decrypted file"
    );
    Ok(report)
}

fn decrypt_stream<R: Read, W: Write>(
    reader: &mut R,
    mut writer: W,
    key: &SymmetricKey,
    iv: &Iv16,
    chunk_size: usize,
) -> Result<FileReport> {
    let mut hasher = Hasher::new();
    let mut plaintext_size = 0u64;
    let mut ciphertext_size = 0u64;
    let mut stream = DecryptStream::open(key, iv);

    loop {
        let chunk = read_chunk(reader, chunk_size)?;
        if chunk.is_empty() {
            break;
        }
        hasher.update(&chunk);
        ciphertext_size += chunk.len() as u64;

        let plain = stream.update(&chunk)?;
        plaintext_size += plain.len() as u64;
        writer.write_all(&plain)?;
    }

    let tail = stream.finish()?;
    plaintext_size += tail.len() as u64;
    writer.write_all(&tail)?;
    writer.flush()?;

    Ok(FileReport {
        plaintext_size,
        ciphertext_size,
        ciphertext_blake3: finalize_hex(&hasher),
    })
}
