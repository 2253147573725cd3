// tests/stream_tests.rs
mod common;

use cbc_file_crypt::consts::AES_BLOCK_SIZE;
use cbc_file_crypt::{decrypt_once, encrypt_once, generate_keys, CryptoError, EncryptStream};

#[test]
fn test_stream_matches_one_shot_at_every_block_boundary() {
    common::setup();
    let material = generate_keys(32).unwrap();

    for len in [1, 15, 16, 17, 48, 63, 64, 65, 200] {
        let plaintext = common::payload(len);
        let expected = encrypt_once(&material.key, &material.iv, &plaintext);

        // p1 is every aligned prefix that still leaves a non-empty tail
        let mut split = 0;
        while split < len {
            let (p1, p2) = plaintext.split_at(split);

            let mut stream = EncryptStream::open(&material.key, &material.iv);
            let mut ciphertext = stream.continue_stream(p1).unwrap();
            ciphertext.extend(stream.finish(p2).unwrap());

            assert_eq!(ciphertext, expected, "len {len}, split {split}");
            split += AES_BLOCK_SIZE;
        }
    }
}

#[test]
fn test_many_small_continue_calls_chain_correctly() {
    let material = generate_keys(16).unwrap();
    let plaintext = common::payload(16 * 20 + 7);

    let mut stream = EncryptStream::open(&material.key, &material.iv);
    let mut ciphertext = Vec::new();
    for block in plaintext[..16 * 20].chunks(AES_BLOCK_SIZE) {
        ciphertext.extend(stream.continue_stream(block).unwrap());
    }
    ciphertext.extend(stream.finish(&plaintext[16 * 20..]).unwrap());

    assert_eq!(
        ciphertext,
        encrypt_once(&material.key, &material.iv, &plaintext)
    );
    assert_eq!(
        decrypt_once(&material.key, &material.iv, &ciphertext).unwrap(),
        plaintext
    );
}

#[test]
fn test_aligned_tail_gets_full_padding_block() {
    let material = generate_keys(32).unwrap();
    let mut stream = EncryptStream::open(&material.key, &material.iv);
    let tail = stream.finish(&[0xAA; 32]).unwrap();
    assert_eq!(tail.len(), 48);
}

#[test]
fn test_stream_errors_leave_no_partial_output() {
    let material = generate_keys(32).unwrap();
    let mut stream = EncryptStream::open(&material.key, &material.iv);

    let first = stream.continue_stream(&[1u8; 16]).unwrap();
    assert_eq!(
        stream.continue_stream(&[2u8; 20]),
        Err(CryptoError::UnalignedInput(20))
    );
    assert_eq!(stream.finish(&[]), Err(CryptoError::EmptyFinalBlock));
    let last = stream.finish(&[3u8; 4]).unwrap();

    // the rejected calls did not advance the chain
    let mut expected_input = vec![1u8; 16];
    expected_input.extend_from_slice(&[3u8; 4]);
    let mut ciphertext = first;
    ciphertext.extend(last);
    assert_eq!(
        ciphertext,
        encrypt_once(&material.key, &material.iv, &expected_input)
    );

    assert_eq!(
        stream.continue_stream(&[0u8; 16]),
        Err(CryptoError::SessionFinalized)
    );
}

#[test]
fn test_independent_sessions_run_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let material = generate_keys(32).unwrap();
                let plaintext = common::payload(1000 + i);
                let mut stream = EncryptStream::open(&material.key, &material.iv);
                let mut ciphertext = stream.continue_stream(&plaintext[..992]).unwrap();
                ciphertext.extend(stream.finish(&plaintext[992..]).unwrap());
                decrypt_once(&material.key, &material.iv, &ciphertext).unwrap() == plaintext
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
