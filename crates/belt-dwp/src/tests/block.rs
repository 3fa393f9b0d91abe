// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Block cipher tests against the STB 34.101.31 known answer.

use crate::block::{block_from_bytes, block_to_bytes, KeySchedule, H};
use crate::error::KeySizeError;

/// STB 34.101.31 block encryption example: X = H[0..16], K = H[128..160].
const ECB_Y: [u8; 16] = [
    0x69, 0xcc, 0xa1, 0xc9, 0x35, 0x57, 0xc9, 0xe3, 0xd6, 0x6b, 0xc3, 0xe0, 0xfa, 0x88, 0xfa,
    0x6e,
];

fn encrypt(key: &[u8], data: &[u8; 16]) -> [u8; 16] {
    let schedule = KeySchedule::new(key).expect("valid key size");
    let mut words = block_from_bytes(data);
    schedule.encrypt_block(&mut words);
    let mut out = [0u8; 16];
    block_to_bytes(&words, &mut out);
    out
}

#[test]
fn test_h_is_a_permutation() {
    let mut seen = [false; 256];
    for &byte in H.iter() {
        assert!(!seen[byte as usize], "duplicate H entry {byte:#04x}");
        seen[byte as usize] = true;
    }
}

#[test]
fn test_stb_block_known_answer() {
    let x: &[u8; 16] = H[0..16].try_into().unwrap();
    assert_eq!(encrypt(&H[128..160], x), ECB_Y);
}

/// A 128-bit key expands by repetition, so k and k||k must agree.
#[test]
fn test_key_expansion_128_repeats() {
    let short = &H[128..144];
    let mut doubled = [0u8; 32];
    doubled[..16].copy_from_slice(short);
    doubled[16..].copy_from_slice(short);

    let x: &[u8; 16] = H[0..16].try_into().unwrap();
    assert_eq!(encrypt(short, x), encrypt(&doubled, x));
}

/// A 192-bit key completes with theta_7 = t1^t2^t3, theta_8 = t4^t5^t6.
#[test]
fn test_key_expansion_192_folds() {
    let short = &H[128..152];
    let mut full = [0u8; 32];
    full[..24].copy_from_slice(short);
    for i in 0..4 {
        full[24 + i] = short[i] ^ short[4 + i] ^ short[8 + i];
        full[28 + i] = short[12 + i] ^ short[16 + i] ^ short[20 + i];
    }

    let x: &[u8; 16] = H[0..16].try_into().unwrap();
    assert_eq!(encrypt(short, x), encrypt(&full, x));
}

#[test]
fn test_rejects_bad_key_sizes() {
    for size in [0usize, 8, 15, 17, 23, 31, 33, 48] {
        assert_eq!(
            KeySchedule::new(&H[..size]).err(),
            Some(KeySizeError(size))
        );
    }
}

#[test]
fn test_key_schedule_debug_is_redacted() {
    let schedule = KeySchedule::new(&H[128..160]).unwrap();
    assert_eq!(format!("{schedule:?}"), "KeySchedule { [protected] }");
}
