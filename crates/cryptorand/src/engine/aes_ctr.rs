// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-256 in counter mode (128-bit big-endian counter, IV = initial counter block).

use aes::Aes256;
use cipher::generic_array::GenericArray;
use cipher::{KeyIvInit, StreamCipher};
use ctr::Ctr128BE;

use super::KeystreamCipher;

/// Key size in bytes
pub(crate) const KEY_SIZE: usize = 32;

/// IV size in bytes (one full counter block)
pub(crate) const IV_SIZE: usize = 16;

/// AES block size in bytes
pub(crate) const BLOCK_SIZE: usize = 16;

pub(crate) struct Aes256CtrCipher {
    inner: Ctr128BE<Aes256>,
}

impl KeystreamCipher for Aes256CtrCipher {
    const KEY_SIZE: usize = KEY_SIZE;
    const IV_SIZE: usize = IV_SIZE;

    fn from_key_iv(key: &[u8], iv: &[u8]) -> Self {
        Self {
            inner: Ctr128BE::<Aes256>::new(
                GenericArray::from_slice(key),
                GenericArray::from_slice(iv),
            ),
        }
    }

    #[inline(always)]
    fn encrypt_buffer(&mut self, buf: &mut [u8]) {
        self.inner.apply_keystream(buf);
    }
}
