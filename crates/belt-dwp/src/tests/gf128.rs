// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Field arithmetic tests for the GF(2^128) multiplier.

use crate::gf128::MulScratch;

fn mul(a: [u64; 2], b: [u64; 2]) -> [u64; 2] {
    let mut scratch = MulScratch::default();
    let mut acc = a;
    scratch.mul(&mut acc, &b);
    acc
}

const A: [u64; 2] = [0x243f6a8885a308d3, 0x13198a2e03707344];
const B: [u64; 2] = [0xa4093822299f31d0, 0x082efa98ec4e6c89];
const C: [u64; 2] = [0x452821e638d01377, 0xbe5466cf34e90c6c];

#[test]
fn test_one_is_the_identity() {
    assert_eq!(mul(A, [1, 0]), A);
    assert_eq!(mul([1, 0], A), A);
}

#[test]
fn test_zero_annihilates() {
    assert_eq!(mul(A, [0, 0]), [0, 0]);
    assert_eq!(mul([0, 0], A), [0, 0]);
}

#[test]
fn test_multiplication_commutes() {
    assert_eq!(mul(A, B), mul(B, A));
}

#[test]
fn test_multiplication_distributes() {
    let left = mul([A[0] ^ B[0], A[1] ^ B[1]], C);
    let right = mul(A, C);
    let right = [right[0] ^ mul(B, C)[0], right[1] ^ mul(B, C)[1]];
    assert_eq!(left, right);
}

/// x^127 * x wraps to the reduction polynomial x^7 + x^2 + x + 1.
#[test]
fn test_reduction_polynomial() {
    let x127 = [0, 1u64 << 63];
    let x = [2, 0];
    assert_eq!(mul(x127, x), [0x87, 0]);
}
