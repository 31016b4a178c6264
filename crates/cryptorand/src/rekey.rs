// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Rekey sequence.
//!
//! 1. Encrypt the whole buffer under the current key.
//! 2. Optionally XOR a seed into it, then wipe the seed.
//! 3. Take the leading `key || iv` bytes as the next key and reinit the cipher.
//! 4. Wipe those bytes and move the cursor past them.
//!
//! The next key is derived from bytes no caller has seen and that are gone
//! before any output is served, so disclosed output never yields a key.

use tracing::trace;

use crate::buffer::KeystreamBuffer;
use crate::engine::CipherEngine;

pub(crate) fn rekey(cipher: &mut CipherEngine, buffer: &mut KeystreamBuffer, seed: Option<&mut [u8]>) {
    let key_len = cipher.key_material_size();
    debug_assert!(key_len < buffer.capacity());

    cipher.encrypt_buffer(buffer.active_mut());

    let seeded = seed.is_some();
    if let Some(seed) = seed {
        buffer.mix_seed(seed);
    }

    cipher.reinit(buffer.key_region(key_len));
    buffer.erase_key_region(key_len);

    trace!(algorithm = %cipher.algorithm(), seeded, "rekeyed keystream cipher");
}
