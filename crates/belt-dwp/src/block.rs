// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Belt block cipher (STB 34.101.31 section 6.1).
//!
//! Operates on four 32-bit little-endian words. The expanded key lives in a
//! schedule struct that is zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_SIZE;
use crate::error::KeySizeError;

/// The H permutation of STB 34.101.31. Its first 16 octets also seed the DWP
/// polynomial accumulator.
#[rustfmt::skip]
pub(crate) const H: [u8; 256] = [
    0xB1, 0x94, 0xBA, 0xC8, 0x0A, 0x08, 0xF5, 0x3B, 0x36, 0x6D, 0x00, 0x8E, 0x58, 0x4A, 0x5D, 0xE4,
    0x85, 0x04, 0xFA, 0x9D, 0x1B, 0xB6, 0xC7, 0xAC, 0x25, 0x2E, 0x72, 0xC2, 0x02, 0xFD, 0xCE, 0x0D,
    0x5B, 0xE3, 0xD6, 0x12, 0x17, 0xB9, 0x61, 0x81, 0xFE, 0x67, 0x86, 0xAD, 0x71, 0x6B, 0x89, 0x0B,
    0x5C, 0xB0, 0xC0, 0xFF, 0x33, 0xC3, 0x56, 0xB8, 0x35, 0xC4, 0x05, 0xAE, 0xD8, 0xE0, 0x7F, 0x99,
    0xE1, 0x2B, 0xDC, 0x1A, 0xE2, 0x82, 0x57, 0xEC, 0x70, 0x3F, 0xCC, 0xF0, 0x95, 0xEE, 0x8D, 0xF1,
    0xC1, 0xAB, 0x76, 0x38, 0x9F, 0xE6, 0x78, 0xCA, 0xF7, 0xC6, 0xF8, 0x60, 0xD5, 0xBB, 0x9C, 0x4F,
    0xF3, 0x3C, 0x65, 0x7B, 0x63, 0x7C, 0x30, 0x6A, 0xDD, 0x4E, 0xA7, 0x79, 0x9E, 0xB2, 0x3D, 0x31,
    0x3E, 0x98, 0xB5, 0x6E, 0x27, 0xD3, 0xBC, 0xCF, 0x59, 0x1E, 0x18, 0x1F, 0x4C, 0x5A, 0xB7, 0x93,
    0xE9, 0xDE, 0xE7, 0x2C, 0x8F, 0x0C, 0x0F, 0xA6, 0x2D, 0xDB, 0x49, 0xF4, 0x6F, 0x73, 0x96, 0x47,
    0x06, 0x07, 0x53, 0x16, 0xED, 0x24, 0x7A, 0x37, 0x39, 0xCB, 0xA3, 0x83, 0x03, 0xA9, 0x8B, 0xF6,
    0x92, 0xBD, 0x9B, 0x1C, 0xE5, 0xD1, 0x41, 0x01, 0x54, 0x45, 0xFB, 0xC9, 0x5E, 0x4D, 0x0E, 0xF2,
    0x68, 0x20, 0x80, 0xAA, 0x22, 0x7D, 0x64, 0x2F, 0x26, 0x87, 0xF9, 0x34, 0x90, 0x40, 0x55, 0x11,
    0xBE, 0x32, 0x97, 0x13, 0x43, 0xFC, 0x9A, 0x48, 0xA0, 0x2A, 0x88, 0x5F, 0x19, 0x4B, 0x09, 0xA1,
    0x7E, 0xCD, 0xA4, 0xD0, 0x15, 0x44, 0xAF, 0x8C, 0xA5, 0x84, 0x50, 0xBF, 0x66, 0xD2, 0xE8, 0x8A,
    0xA2, 0xD7, 0x46, 0x52, 0x42, 0xA8, 0xDF, 0xB3, 0x69, 0x74, 0xC5, 0x51, 0xEB, 0x23, 0x29, 0x21,
    0xD4, 0xEF, 0xD9, 0xB4, 0x3A, 0x62, 0x28, 0x75, 0x91, 0x14, 0x10, 0xEA, 0x77, 0x6C, 0xDA, 0x1D,
];

/// G_r transform: H applied to each octet of the word, then rotate toward
/// the high bits.
#[inline(always)]
fn g(x: u32, r: u32) -> u32 {
    let [b0, b1, b2, b3] = x.to_le_bytes();
    u32::from_le_bytes([
        H[b0 as usize],
        H[b1 as usize],
        H[b2 as usize],
        H[b3 as usize],
    ])
    .rotate_left(r)
}

#[inline]
pub(crate) fn block_from_bytes(bytes: &[u8; BLOCK_SIZE]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes(
            chunk
                .try_into()
                .expect("infallible: chunks_exact yields 4-byte chunks"),
        );
    }
    words
}

#[inline]
pub(crate) fn block_to_bytes(words: &[u32; 4], out: &mut [u8; BLOCK_SIZE]) {
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(4)) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

/// Expanded belt key schedule: eight 32-bit words.
///
/// 256-bit keys are taken verbatim; 128-bit keys are repeated; 192-bit keys
/// are completed with the two XOR folds of the standard.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct KeySchedule {
    theta: [u32; 8],
}

impl KeySchedule {
    pub fn new(key: &[u8]) -> Result<Self, KeySizeError> {
        if !matches!(key.len(), 16 | 24 | 32) {
            return Err(KeySizeError(key.len()));
        }

        let mut theta = [0u32; 8];
        for (word, chunk) in theta.iter_mut().zip(key.chunks_exact(4)) {
            *word = u32::from_le_bytes(
                chunk
                    .try_into()
                    .expect("infallible: chunks_exact yields 4-byte chunks"),
            );
        }
        match key.len() {
            16 => theta.copy_within(0..4, 4),
            24 => {
                theta[6] = theta[0] ^ theta[1] ^ theta[2];
                theta[7] = theta[3] ^ theta[4] ^ theta[5];
            }
            _ => {}
        }

        Ok(Self { theta })
    }

    /// Encrypt one block in place.
    ///
    /// Input word order is a‖b‖c‖d of the standard; the final permutation to
    /// b‖d‖a‖c is applied before returning.
    pub fn encrypt_block(&self, x: &mut [u32; 4]) {
        let [mut a, mut b, mut c, mut d] = *x;

        for i in 1usize..=8 {
            // round keys K[7i-6] .. K[7i], taken from theta cyclically
            let k = |j: usize| self.theta[(7 * (i - 1) + j) % 8];

            b ^= g(a.wrapping_add(k(0)), 5);
            c ^= g(d.wrapping_add(k(1)), 21);
            a = a.wrapping_sub(g(b.wrapping_add(k(2)), 13));
            let e = g(b.wrapping_add(c).wrapping_add(k(3)), 21) ^ i as u32;
            b = b.wrapping_add(e);
            c = c.wrapping_sub(e);
            d = d.wrapping_add(g(c.wrapping_add(k(4)), 13));
            b ^= g(a.wrapping_add(k(5)), 21);
            c ^= g(d.wrapping_add(k(6)), 5);

            core::mem::swap(&mut a, &mut b);
            core::mem::swap(&mut c, &mut d);
            core::mem::swap(&mut b, &mut c);
        }

        *x = [b, d, a, c];
    }
}

impl core::fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "KeySchedule {{ [protected] }}")
    }
}
