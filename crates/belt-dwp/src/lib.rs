// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! DWP (data wrap) authenticated encryption per STB 34.101.31 (belt).
//!
//! Couples belt counter-mode encryption of a payload with a GF(2^128)
//! polynomial authenticator over associated data and ciphertext, producing an
//! 8-octet tag. The [`Dwp`] state accepts both input streams incrementally in
//! arbitrary chunk sizes; [`dwp_wrap`]/[`dwp_unwrap`] are the one-shot
//! composition. All key-derived state is zeroized on drop.
//!
//! References:
//! - STB 34.101.31: Information technology. Data protection. Cryptographic
//!   algorithms of data encryption and integrity control.
//!   <https://apmi.bsu.by/assets/files/std/belt-spec371.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod aead;
mod block;
mod consts;
mod ctr;
mod dwp;
mod error;
mod gf128;
mod polyhash;
mod types;

pub use aead::{dwp_unwrap, dwp_wrap};
pub use consts::{BLOCK_SIZE, IV_SIZE, TAG_SIZE};
pub use dwp::Dwp;
pub use error::{KeySizeError, UnwrapError};
pub use types::{Iv, Tag};
