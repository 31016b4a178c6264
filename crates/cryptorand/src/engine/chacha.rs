// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20, original construction: 64-bit nonce, 64-bit block counter
//! starting at zero.

use chacha20::ChaCha20Legacy;
use cipher::generic_array::GenericArray;
use cipher::{KeyIvInit, StreamCipher};

use super::KeystreamCipher;

/// Key size in bytes
pub(crate) const KEY_SIZE: usize = 32;

/// Nonce size in bytes
pub(crate) const IV_SIZE: usize = 8;

/// ChaCha20 block size in bytes
pub(crate) const BLOCK_SIZE: usize = 64;

pub(crate) struct ChaCha20Cipher {
    inner: ChaCha20Legacy,
}

impl KeystreamCipher for ChaCha20Cipher {
    const KEY_SIZE: usize = KEY_SIZE;
    const IV_SIZE: usize = IV_SIZE;

    fn from_key_iv(key: &[u8], iv: &[u8]) -> Self {
        Self {
            inner: ChaCha20Legacy::new(GenericArray::from_slice(key), GenericArray::from_slice(iv)),
        }
    }

    #[inline(always)]
    fn encrypt_buffer(&mut self, buf: &mut [u8]) {
        self.inner.apply_keystream(buf);
    }
}
