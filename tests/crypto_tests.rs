// tests/crypto_tests.rs
mod common;

use cbc_file_crypt::consts::AES_BLOCK_SIZE;
use cbc_file_crypt::key_ops::iv_from_slice;
use cbc_file_crypt::{
    decrypt_once, encrypt_once, generate_keys, pad, CryptoError, EncryptStream, SymmetricKey,
};

// NIST SP 800-38A, F.2.1 / F.2.5
const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
const NIST_PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);
const NIST_KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const NIST_CIPHERTEXT_128: &str = concat!(
    "7649abac8119b246cee98e9b12e9197d",
    "5086cb9b507219ee95db113a917678b2",
    "73bed6b8e3c1743b7116e69e22229516",
    "3ff1caa1681fac09120eca307586e1a7",
);
const NIST_KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const NIST_CIPHERTEXT_256: &str = concat!(
    "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
    "9cfc4e967edb808d679f777bc6702c7d",
    "39f23369a9d9bacfa530e26304231461",
    "b2eb05e2c39be9fcda6c19078c6a9d1b",
);

#[test]
fn test_nist_cbc_vectors() {
    common::setup();
    let plaintext = hex::decode(NIST_PLAINTEXT).unwrap();

    for (key_hex, expected_hex) in [
        (NIST_KEY_128, NIST_CIPHERTEXT_128),
        (NIST_KEY_256, NIST_CIPHERTEXT_256),
    ] {
        let (key, iv) = common::key_iv(key_hex, NIST_IV);
        let expected = hex::decode(expected_hex).unwrap();

        // aligned continue calls add no padding, so they match the raw vectors
        let mut stream = EncryptStream::open(&key, &iv);
        assert_eq!(stream.continue_stream(&plaintext).unwrap(), expected);

        // the one-shot output starts with the same blocks, then one padding block
        let one_shot = encrypt_once(&key, &iv, &plaintext);
        assert_eq!(one_shot.len(), plaintext.len() + AES_BLOCK_SIZE);
        assert_eq!(&one_shot[..expected.len()], expected.as_slice());
        assert_eq!(decrypt_once(&key, &iv, &one_shot).unwrap(), plaintext);
    }
}

#[test]
fn test_hello_with_zero_key_and_iv() {
    let key = SymmetricKey::from_slice(&[0u8; 32]).unwrap();
    let iv = iv_from_slice(&[0u8; 16]).unwrap();

    let padded = pad(b"HELLO", AES_BLOCK_SIZE).unwrap();
    assert_eq!(padded.len(), 16);
    assert_eq!(&padded[5..], &[0x0Bu8; 11]);

    let ciphertext = encrypt_once(&key, &iv, b"HELLO");
    assert_eq!(ciphertext.len(), 16);
    assert_ne!(ciphertext, padded);
    assert_eq!(decrypt_once(&key, &iv, &ciphertext).unwrap(), b"HELLO");
}

#[test]
fn test_roundtrip_across_lengths_and_strengths() {
    for strength in [16, 32] {
        let material = generate_keys(strength).unwrap();
        for len in [0, 1, 5, 15, 16, 17, 31, 32, 33, 100, 255, 256, 1000] {
            let plaintext = common::payload(len);
            let ciphertext = encrypt_once(&material.key, &material.iv, &plaintext);

            assert_eq!(ciphertext.len() % AES_BLOCK_SIZE, 0, "len {len}");
            assert!(ciphertext.len() > len, "len {len}");
            assert_eq!(
                decrypt_once(&material.key, &material.iv, &ciphertext).unwrap(),
                plaintext,
                "strength {strength}, len {len}"
            );
        }
    }
}

#[test]
fn test_encrypt_is_deterministic_for_same_key_and_iv() {
    let (key, iv) = common::key_iv(NIST_KEY_256, NIST_IV);
    assert_eq!(
        encrypt_once(&key, &iv, b"same input"),
        encrypt_once(&key, &iv, b"same input")
    );
}

#[test]
fn test_decrypt_rejects_bad_ciphertext_lengths() {
    let (key, iv) = common::key_iv(NIST_KEY_128, NIST_IV);
    for len in [0, 1, 15, 17, 33] {
        assert_eq!(
            decrypt_once(&key, &iv, &vec![0u8; len]),
            Err(CryptoError::InvalidCiphertextLength(len))
        );
    }
}

#[test]
fn test_tampered_final_block_never_panics() {
    let material = generate_keys(32).unwrap();
    for len in [0, 3, 16, 40, 64] {
        let plaintext = common::payload(len);
        let mut ciphertext = encrypt_once(&material.key, &material.iv, &plaintext);
        let last = ciphertext.len() - 1;
        ciphertext[last] ^= 0x01;

        match decrypt_once(&material.key, &material.iv, &ciphertext) {
            Ok(recovered) => assert_ne!(recovered, plaintext, "len {len}"),
            Err(err) => assert_eq!(err, CryptoError::InvalidPadding, "len {len}"),
        }
    }
}

#[test]
fn test_decrypt_with_wrong_key_does_not_return_plaintext() {
    let plaintext = b"secret message".to_vec();
    let right = generate_keys(32).unwrap();
    let wrong = generate_keys(32).unwrap();

    let ciphertext = encrypt_once(&right.key, &right.iv, &plaintext);
    match decrypt_once(&wrong.key, &right.iv, &ciphertext) {
        Ok(recovered) => assert_ne!(recovered, plaintext),
        Err(err) => assert_eq!(err, CryptoError::InvalidPadding),
    }
}
