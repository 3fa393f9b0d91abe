// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Type aliases for DWP.

use crate::consts::{IV_SIZE, TAG_SIZE};

/// Synchronization vector type
pub type Iv = [u8; IV_SIZE];

/// Authentication tag type
pub type Tag = [u8; TAG_SIZE];
