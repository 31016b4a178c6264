// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte countdown that decides when fresh entropy is mixed in.
//!
//! Bounds how much keystream one entropy-anchored key chain produces and
//! periodically re-anchors it to the entropy source instead of relying only
//! on self-derived keys.

/// Countdown of bytes left before the next mandatory reseed.
///
/// Starts at zero, so the first request after construction always reseeds.
#[derive(Debug)]
pub(crate) struct ReseedPolicy {
    countdown: usize,
    threshold: usize,
}

impl ReseedPolicy {
    pub(crate) fn new(threshold: usize) -> Self {
        debug_assert!(threshold > 0);

        Self {
            countdown: 0,
            threshold,
        }
    }

    /// Whether a request of `len` bytes must be preceded by a reseed.
    #[inline(always)]
    pub(crate) fn is_due(&self, len: usize) -> bool {
        self.countdown <= len
    }

    /// Restarts the countdown. Called exactly when a reseed happened.
    #[inline(always)]
    pub(crate) fn reset(&mut self) {
        self.countdown = self.threshold;
    }

    /// Charges a serviced request against the countdown.
    ///
    /// Wraps on underflow: a request larger than the countdown leaves a huge
    /// countdown and postpones the next reseed.
    #[inline(always)]
    pub(crate) fn charge(&mut self, len: usize) {
        self.countdown = self.countdown.wrapping_sub(len);
    }

    #[inline(always)]
    pub(crate) fn countdown(&self) -> usize {
        self.countdown
    }

    #[inline(always)]
    pub(crate) fn threshold(&self) -> usize {
        self.threshold
    }
}
