// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! One-shot wrap/unwrap over the streaming DWP state.

use crate::dwp::Dwp;
use crate::error::{KeySizeError, UnwrapError};
use crate::types::{Iv, Tag};

/// Encrypt `data` in place and write the tag authenticating `ad` plus the
/// resulting ciphertext.
///
/// The key must be 16, 24 or 32 bytes; the IV must be unique per key.
pub fn dwp_wrap(
    key: &[u8],
    iv: &Iv,
    ad: &[u8],
    data: &mut [u8],
    tag: &mut Tag,
) -> Result<(), KeySizeError> {
    let mut state = Dwp::new(key, iv)?;
    state.auth_data(ad);
    state.encrypt(data);
    state.auth_ciphertext(data);
    state.compute_tag(tag);
    Ok(())
}

/// Verify the tag over `ad` and the ciphertext in `data`, then decrypt
/// `data` in place.
///
/// On authentication failure `data` is left as the untouched ciphertext and
/// no plaintext is produced.
pub fn dwp_unwrap(
    key: &[u8],
    iv: &Iv,
    ad: &[u8],
    data: &mut [u8],
    tag: &Tag,
) -> Result<(), UnwrapError> {
    let mut state = Dwp::new(key, iv)?;
    state.auth_data(ad);
    state.auth_ciphertext(data);

    if !state.verify_tag(tag) {
        return Err(UnwrapError::AuthenticationFailed);
    }

    state.decrypt(data);
    Ok(())
}
