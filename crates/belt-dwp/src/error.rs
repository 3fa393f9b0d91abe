// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! DWP error types.

/// Key of a size the belt key schedule does not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid key size: expected 16, 24 or 32 bytes, got {0}")]
pub struct KeySizeError(
    /// The rejected size in bytes.
    pub usize,
);

/// Errors that can occur during DWP unwrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UnwrapError {
    /// Key was not 16, 24 or 32 bytes.
    #[error("invalid key size: expected 16, 24 or 32 bytes, got {0}")]
    InvalidKeySize(usize),

    /// Tag mismatch; no plaintext was produced.
    #[error("authentication failed: tag mismatch")]
    AuthenticationFailed,
}

impl From<KeySizeError> for UnwrapError {
    fn from(err: KeySizeError) -> Self {
        Self::InvalidKeySize(err.0)
    }
}
