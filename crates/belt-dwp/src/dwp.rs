// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental DWP state machine.
//!
//! Two logically independent byte streams feed one state: associated data
//! (authenticated only) and payload (encrypted, with its ciphertext
//! authenticated). Associated data must come first; the first payload byte
//! closes the associated-data section. Producing or verifying the tag
//! finalizes the accumulator, after which only keystream application remains
//! legal so that unwrap can decrypt after verification.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{KeySchedule, H};
use crate::consts::TAG_SIZE;
use crate::ctr::BeltCtr;
use crate::error::KeySizeError;
use crate::polyhash::PolyHash;
use crate::types::{Iv, Tag};

/// Which section of input the state is accepting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Associated (authenticated-only) data.
    Ad,
    /// Payload: ciphertext through the accumulator, keystream over the data.
    Ct,
    /// Tag produced; the accumulator is spent.
    Final,
}

#[inline]
fn words_to_limbs(words: &[u32; 4]) -> [u64; 2] {
    [
        (words[0] as u64) | ((words[1] as u64) << 32),
        (words[2] as u64) | ((words[3] as u64) << 32),
    ]
}

#[inline]
fn limbs_to_words(limbs: &[u64; 2]) -> [u32; 4] {
    [
        limbs[0] as u32,
        (limbs[0] >> 32) as u32,
        limbs[1] as u32,
        (limbs[1] >> 32) as u32,
    ]
}

#[inline]
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Streaming DWP state with guaranteed zeroization.
///
/// Feed order per state: [`auth_data`](Self::auth_data) calls, then payload
/// calls, then one finalization. Wrapping runs
/// `auth_data -> encrypt -> auth_ciphertext -> compute_tag`; unwrapping runs
/// `auth_data -> auth_ciphertext -> verify_tag -> decrypt`, and must not
/// release plaintext when verification fails. Chunk sizes are arbitrary; the
/// result only depends on the concatenated streams.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Dwp {
    key: KeySchedule,
    ctr: BeltCtr,
    hash: PolyHash,
    len_ad: u64,
    len_ct: u64,
    #[zeroize(skip)]
    phase: Phase,
}

impl Dwp {
    /// Create a state from a 16-, 24- or 32-byte key and a 16-byte IV.
    ///
    /// IV uniqueness per key is the caller's responsibility; a repeated pair
    /// forfeits both confidentiality and authenticity.
    pub fn new(key: &[u8], iv: &Iv) -> Result<Self, KeySizeError> {
        let key = KeySchedule::new(key)?;
        let ctr = BeltCtr::new(&key, iv);

        // hash key: the counter block (encrypted IV) encrypted once more
        let mut r_words = *ctr.counter();
        key.encrypt_block(&mut r_words);
        let r = words_to_limbs(&r_words);
        r_words.zeroize();

        let t = [
            u64::from_le_bytes(
                H[0..8]
                    .try_into()
                    .expect("infallible: H[0..8] is exactly 8 bytes"),
            ),
            u64::from_le_bytes(
                H[8..16]
                    .try_into()
                    .expect("infallible: H[8..16] is exactly 8 bytes"),
            ),
        ];

        Ok(Self {
            key,
            ctr,
            hash: PolyHash::new(r, t),
            len_ad: 0,
            len_ct: 0,
            phase: Phase::Ad,
        })
    }

    /// Absorb associated data. Legal only before the first payload byte.
    pub fn auth_data(&mut self, ad: &[u8]) {
        debug_assert!(
            ad.is_empty() || self.phase == Phase::Ad,
            "associated data fed after payload"
        );
        self.len_ad = self.len_ad.wrapping_add((ad.len() as u64) << 3);
        self.hash.absorb(ad);
    }

    /// First non-empty payload input closes the associated-data section:
    /// any staged residue is zero-padded and folded.
    fn enter_ct_phase(&mut self) {
        if self.phase == Phase::Ad {
            self.hash.flush_padded();
            self.phase = Phase::Ct;
        }
    }

    /// Encrypt payload in place. The accumulator is not touched; callers
    /// authenticate the resulting ciphertext via
    /// [`auth_ciphertext`](Self::auth_ciphertext).
    pub fn encrypt(&mut self, data: &mut [u8]) {
        if !data.is_empty() {
            self.enter_ct_phase();
        }
        self.ctr.apply(&self.key, data);
    }

    /// Decrypt payload in place. Identical keystream application as
    /// [`encrypt`](Self::encrypt); kept separate so call sites read as the
    /// operation they perform.
    pub fn decrypt(&mut self, data: &mut [u8]) {
        if !data.is_empty() {
            self.enter_ct_phase();
        }
        self.ctr.apply(&self.key, data);
    }

    /// Absorb ciphertext into the authenticator.
    pub fn auth_ciphertext(&mut self, ct: &[u8]) {
        debug_assert!(
            ct.is_empty() || self.phase != Phase::Final,
            "ciphertext fed after finalization"
        );
        if !ct.is_empty() {
            self.enter_ct_phase();
        }
        self.len_ct = self.len_ct.wrapping_add((ct.len() as u64) << 3);
        self.hash.absorb(ct);
    }

    /// Flush the payload residue, fold the length block and encrypt the
    /// accumulator. One-shot.
    fn finalize(&mut self) -> [u32; 4] {
        debug_assert!(self.phase != Phase::Final, "state already finalized");

        self.hash.flush_padded();
        self.hash.fold_limbs([self.len_ad, self.len_ct]);
        self.phase = Phase::Final;

        let mut words = limbs_to_words(self.hash.state());
        self.key.encrypt_block(&mut words);
        words
    }

    /// Produce the 8-octet authentication tag.
    pub fn compute_tag(&mut self, tag: &mut Tag) {
        let mut words = self.finalize();
        tag[0..4].copy_from_slice(&words[0].to_le_bytes());
        tag[4..8].copy_from_slice(&words[1].to_le_bytes());
        words.zeroize();
    }

    /// Verify an expected tag in constant time.
    ///
    /// Returns whether the tag matches. On `false` the caller must not emit
    /// any plaintext.
    pub fn verify_tag(&mut self, tag: &Tag) -> bool {
        let mut words = self.finalize();
        let mut expected = [0u8; TAG_SIZE];
        expected[0..4].copy_from_slice(&words[0].to_le_bytes());
        expected[4..8].copy_from_slice(&words[1].to_le_bytes());
        words.zeroize();

        let matches = constant_time_eq(&expected, tag);
        expected.zeroize();
        matches
    }
}

impl core::fmt::Debug for Dwp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Dwp {{ [protected] }}")
    }
}
