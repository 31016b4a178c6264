// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Adapts a status-code entropy callback into an [`EntropySource`].
///
/// The callback must fill the whole slice and return `0`; any other value is
/// reported as [`EntropyError::CallbackFailed`] carrying that status.
///
/// # Example
///
/// ```rust
/// use cryptorand::{CallbackEntropySource, EntropySource};
///
/// let source = CallbackEntropySource::new(|buf: &mut [u8]| match getrandom::fill(buf) {
///     Ok(()) => 0,
///     Err(_) => -1,
/// });
///
/// let mut seed = [0u8; 48];
/// source.fill_bytes(&mut seed).expect("Failed to fill_bytes(..)");
/// ```
pub struct CallbackEntropySource<F>
where
    F: Fn(&mut [u8]) -> i32,
{
    callback: F,
}

impl<F> CallbackEntropySource<F>
where
    F: Fn(&mut [u8]) -> i32,
{
    /// Wraps `callback`.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> EntropySource for CallbackEntropySource<F>
where
    F: Fn(&mut [u8]) -> i32,
{
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        match (self.callback)(dest) {
            0 => Ok(()),
            status => Err(EntropyError::CallbackFailed(status)),
        }
    }
}

impl<F> fmt::Debug for CallbackEntropySource<F>
where
    F: Fn(&mut [u8]) -> i32,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackEntropySource").finish_non_exhaustive()
    }
}
