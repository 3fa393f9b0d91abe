// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! CTR substate tests: known keystream and residual-byte continuity.

use crate::block::{KeySchedule, H};
use crate::ctr::BeltCtr;

/// CTR encryption of H[0..48] under key H[128..160], iv H[192..208]
/// (STB 34.101.31 counter-mode example data).
const CT48: [u8; 48] = [
    0x52, 0xc9, 0xaf, 0x96, 0xff, 0x50, 0xf6, 0x44, 0x35, 0xfc, 0x43, 0xde, 0xf5, 0x6b, 0xd7,
    0x97, 0xd5, 0xb5, 0xb1, 0xff, 0x79, 0xfb, 0x41, 0x25, 0x7a, 0xb9, 0xcd, 0xf6, 0xe6, 0x3e,
    0x81, 0xf8, 0xf0, 0x03, 0x41, 0x47, 0x3e, 0xae, 0x40, 0x98, 0x33, 0x62, 0x2d, 0xe0, 0x52,
    0x13, 0x77, 0x3a,
];

fn schedule() -> KeySchedule {
    KeySchedule::new(&H[128..160]).expect("valid key size")
}

fn iv() -> [u8; 16] {
    H[192..208].try_into().unwrap()
}

#[test]
fn test_keystream_known_answer() {
    let key = schedule();
    let mut ctr = BeltCtr::new(&key, &iv());

    let mut data = [0u8; 48];
    data.copy_from_slice(&H[0..48]);
    ctr.apply(&key, &mut data);

    assert_eq!(data, CT48);
}

/// Split calls must consume leftover keystream bytes before advancing the
/// counter.
#[test]
fn test_split_calls_are_byte_continuous() {
    let key = schedule();
    let mut ctr = BeltCtr::new(&key, &iv());

    let mut data = [0u8; 48];
    data.copy_from_slice(&H[0..48]);

    let (head, rest) = data.split_at_mut(1);
    ctr.apply(&key, head);
    let (mid, tail) = rest.split_at_mut(7);
    ctr.apply(&key, mid);
    let (next, last) = tail.split_at_mut(21);
    ctr.apply(&key, next);
    ctr.apply(&key, last);

    assert_eq!(data, CT48);
}

#[test]
fn test_apply_twice_is_identity() {
    let key = schedule();
    let mut data = [0u8; 23];
    data.copy_from_slice(&H[0..23]);

    let mut ctr = BeltCtr::new(&key, &iv());
    ctr.apply(&key, &mut data);
    let mut ctr = BeltCtr::new(&key, &iv());
    ctr.apply(&key, &mut data);

    assert_eq!(data, H[0..23]);
}

#[test]
fn test_empty_input_is_a_no_op() {
    let key = schedule();
    let mut ctr = BeltCtr::new(&key, &iv());

    ctr.apply(&key, &mut []);
    let mut data = [0u8; 16];
    data.copy_from_slice(&H[0..16]);
    ctr.apply(&key, &mut data);

    assert_eq!(data, CT48[..16]);
}
