// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shared constants for the belt cipher and DWP.

/// Cipher block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Authentication tag size in bytes
pub const TAG_SIZE: usize = 8;

/// Synchronization vector (IV) size in bytes
pub const IV_SIZE: usize = 16;
