// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming polynomial hash of DWP.
//!
//! Folds input one 128-bit block at a time as `T <- (T ^ block) * R`. Partial
//! input is staged in a 16-octet buffer and only folded once a full block is
//! available or the current section ends; the zero padding of a section is
//! never carried into the next one.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::BLOCK_SIZE;
use crate::gf128::MulScratch;

#[inline]
fn limbs_from(block: &[u8; BLOCK_SIZE]) -> [u64; 2] {
    [
        u64::from_le_bytes(
            block[0..8]
                .try_into()
                .expect("infallible: block[0..8] is exactly 8 bytes"),
        ),
        u64::from_le_bytes(
            block[8..16]
                .try_into()
                .expect("infallible: block[8..16] is exactly 8 bytes"),
        ),
    ]
}

/// Polynomial accumulator state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct PolyHash {
    r: [u64; 2],
    t: [u64; 2],
    block: [u8; BLOCK_SIZE],
    filled: usize,
    scratch: MulScratch,
}

impl PolyHash {
    pub fn new(r: [u64; 2], t: [u64; 2]) -> Self {
        Self {
            r,
            t,
            block: [0; BLOCK_SIZE],
            filled: 0,
            scratch: MulScratch::default(),
        }
    }

    /// Fold a block already in limb form (used for the length block).
    pub fn fold_limbs(&mut self, limbs: [u64; 2]) {
        self.t[0] ^= limbs[0];
        self.t[1] ^= limbs[1];
        self.scratch.mul(&mut self.t, &self.r);
    }

    /// Absorb section bytes, folding every completed 128-bit block.
    pub fn absorb(&mut self, data: &[u8]) {
        let mut pos = 0;

        if self.filled > 0 {
            let take = (BLOCK_SIZE - self.filled).min(data.len());
            self.block[self.filled..self.filled + take].copy_from_slice(&data[..take]);
            self.filled += take;
            pos = take;

            if self.filled < BLOCK_SIZE {
                return;
            }
            let limbs = limbs_from(&self.block);
            self.fold_limbs(limbs);
            self.filled = 0;
        }

        while pos + BLOCK_SIZE <= data.len() {
            let limbs = limbs_from(
                data[pos..pos + BLOCK_SIZE]
                    .try_into()
                    .expect("infallible: slice is exactly BLOCK_SIZE bytes"),
            );
            self.fold_limbs(limbs);
            pos += BLOCK_SIZE;
        }

        if pos < data.len() {
            let remaining = data.len() - pos;
            self.block[..remaining].copy_from_slice(&data[pos..]);
            self.filled = remaining;
        }
    }

    /// Zero-pad and fold any staged partial block. Called when a section
    /// terminates.
    pub fn flush_padded(&mut self) {
        if self.filled > 0 {
            self.block[self.filled..].fill(0);
            let limbs = limbs_from(&self.block);
            self.fold_limbs(limbs);
            self.filled = 0;
        }
    }

    pub fn state(&self) -> &[u64; 2] {
        &self.t
    }
}

impl core::fmt::Debug for PolyHash {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PolyHash {{ [protected] }}")
    }
}
