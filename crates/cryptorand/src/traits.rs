// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Source of unpredictable bytes used to seed and reseed a
/// [`Generator`](crate::Generator).
///
/// Implementations must provide randomness suitable for cryptographic keys.
/// They may block; the generator waits exactly as long as the call does.
pub trait EntropySource {
    /// Fills the whole destination buffer with unpredictable bytes.
    ///
    /// # Errors
    ///
    /// Returns an [`EntropyError`] if the source cannot fill `dest`. A partial
    /// fill must be reported as an error.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    #[inline(always)]
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
