// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity keystream buffer.
//!
//! One inline array serves two roles. Right after a rekey the leading
//! `key + iv` bytes are the *key region*; they are wiped before the cursor
//! moves past them, and the rest, `[cursor, capacity)`, is the *output
//! region* that callers may read. Bytes are wiped as they are handed out,
//! so `[0, cursor)` is always zero.

use core::fmt;

use zeroize::Zeroize;

use crate::config::MAX_CAPACITY;

pub(crate) struct KeystreamBuffer {
    bytes: [u8; MAX_CAPACITY],
    capacity: usize,
    cursor: usize,
    #[cfg(test)]
    pub(crate) erased_key_regions: Vec<Vec<u8>>,
}

impl KeystreamBuffer {
    /// Creates a zeroed, exhausted buffer of `capacity` bytes.
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(capacity <= MAX_CAPACITY, "capacity exceeds inline storage");

        Self {
            bytes: [0u8; MAX_CAPACITY],
            capacity,
            cursor: capacity,
            #[cfg(test)]
            erased_key_regions: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Unread bytes in the output region.
    #[inline(always)]
    pub(crate) fn available(&self) -> usize {
        self.capacity - self.cursor
    }

    #[inline(always)]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.cursor == self.capacity
    }

    /// The whole active buffer, for in-place encryption.
    #[inline(always)]
    pub(crate) fn active_mut(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.capacity]
    }

    /// The first `len` bytes, which a rekey turns into the next `key || iv`.
    #[inline(always)]
    pub(crate) fn key_region(&self, len: usize) -> &[u8] {
        debug_assert!(len < self.capacity);
        &self.bytes[..len]
    }

    /// XORs `seed` into the start of the buffer over
    /// `min(seed.len(), capacity)` bytes, then wipes all of `seed`.
    pub(crate) fn mix_seed(&mut self, seed: &mut [u8]) {
        let active = &mut self.bytes[..self.capacity];

        for (dst, src) in active.iter_mut().zip(seed.iter()) {
            *dst ^= *src;
        }

        seed.zeroize();
    }

    /// Wipes the key region and moves the cursor past it.
    pub(crate) fn erase_key_region(&mut self, len: usize) {
        debug_assert!(len < self.capacity);

        #[cfg(test)]
        self.erased_key_regions.push(self.bytes[..len].to_vec());

        self.bytes[..len].zeroize();
        self.cursor = len;
    }

    /// Copies up to `out.len()` bytes from the output region, wiping them in
    /// the buffer. Returns the number of bytes copied.
    pub(crate) fn take(&mut self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.available());
        let src = &mut self.bytes[self.cursor..self.cursor + n];

        out[..n].copy_from_slice(src);
        src.zeroize();

        self.cursor += n;
        debug_assert!(self.cursor <= self.capacity);

        n
    }

    /// Wipes everything and marks the buffer exhausted.
    pub(crate) fn invalidate(&mut self) {
        self.bytes.zeroize();
        self.cursor = self.capacity;
    }

    #[cfg(test)]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.capacity]
    }

    #[cfg(test)]
    pub(crate) fn is_zeroed(&self) -> bool {
        self.bytes.iter().all(|b| *b == 0)
    }
}

impl Drop for KeystreamBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for KeystreamBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "KeystreamBuffer {{ capacity: {}, cursor: {}, bytes: [REDACTED] }}",
            self.capacity, self.cursor
        )
    }
}
