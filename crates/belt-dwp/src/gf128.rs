// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Multiplication in GF(2^128) for the DWP polynomial hash.
//!
//! Field elements are 128-bit little-endian integers held as two u64 limbs;
//! bit i is the coefficient of x^i. Reduction is modulo
//! x^128 + x^7 + x^2 + x + 1 (STB 34.101.31). Bit decisions are masks, not
//! branches.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Low part of the reduction polynomial: x^7 + x^2 + x + 1.
const POLY: u64 = 0x87;

/// Work variables for one multiplication, zeroized after use.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct MulScratch {
    z: [u64; 2],
    v: [u64; 2],
}

impl MulScratch {
    /// acc <- acc * m
    pub fn mul(&mut self, acc: &mut [u64; 2], m: &[u64; 2]) {
        self.z = [0; 2];
        self.v = *acc;

        for half in 0..2 {
            let mut bits = m[half];
            for _ in 0..64 {
                let select = (bits & 1).wrapping_neg();
                self.z[0] ^= self.v[0] & select;
                self.z[1] ^= self.v[1] & select;

                // v <- v * x, reduced
                let carry = (self.v[1] >> 63).wrapping_neg();
                self.v[1] = (self.v[1] << 1) | (self.v[0] >> 63);
                self.v[0] = (self.v[0] << 1) ^ (carry & POLY);

                bits >>= 1;
            }
        }

        *acc = self.z;
        self.zeroize();
    }
}

impl core::fmt::Debug for MulScratch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MulScratch {{ [protected] }}")
    }
}
