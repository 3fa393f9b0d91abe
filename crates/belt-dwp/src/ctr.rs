// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Belt counter-mode substate.
//!
//! The counter starts as the encrypted IV; each keystream block is produced
//! by incrementing the 128-bit little-endian counter and encrypting it.
//! Unused trailing keystream bytes are kept so split calls stay
//! byte-continuous.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{block_from_bytes, block_to_bytes, KeySchedule};
use crate::consts::{BLOCK_SIZE, IV_SIZE};

/// CTR keystream state with guaranteed zeroization.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct BeltCtr {
    ctr: [u32; 4],
    block: [u8; BLOCK_SIZE],
    reserved: usize,
}

impl BeltCtr {
    pub fn new(key: &KeySchedule, iv: &[u8; IV_SIZE]) -> Self {
        let mut ctr = block_from_bytes(iv);
        key.encrypt_block(&mut ctr);
        Self {
            ctr,
            block: [0; BLOCK_SIZE],
            reserved: 0,
        }
    }

    /// The current counter block. Right after construction this is the
    /// encrypted IV, which the DWP state encrypts once more to derive its
    /// polynomial-hash key.
    pub fn counter(&self) -> &[u32; 4] {
        &self.ctr
    }

    fn next_block(&mut self, key: &KeySchedule) {
        // 128-bit little-endian increment, wrapping
        for limb in self.ctr.iter_mut() {
            *limb = limb.wrapping_add(1);
            if *limb != 0 {
                break;
            }
        }

        let mut keystream = self.ctr;
        key.encrypt_block(&mut keystream);
        block_to_bytes(&keystream, &mut self.block);
        keystream.zeroize();
    }

    /// XOR the keystream into `data` in place. Encryption and decryption are
    /// the same operation.
    pub fn apply(&mut self, key: &KeySchedule, data: &mut [u8]) {
        let mut pos = 0;

        while pos < data.len() {
            if self.reserved == 0 {
                self.next_block(key);
                self.reserved = BLOCK_SIZE;
            }

            let offset = BLOCK_SIZE - self.reserved;
            let take = self.reserved.min(data.len() - pos);
            for (byte, ks_byte) in data[pos..pos + take]
                .iter_mut()
                .zip(&self.block[offset..offset + take])
            {
                *byte ^= ks_byte;
            }
            self.reserved -= take;
            pos += take;
        }
    }
}

impl core::fmt::Debug for BeltCtr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "BeltCtr {{ [protected] }}")
    }
}
