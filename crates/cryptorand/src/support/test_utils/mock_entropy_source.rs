// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (produces bytes according to the pattern).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Fail fill_bytes on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthFillBytes(usize),
}

/// Bytes produced by a successful [`MockEntropySource`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropyPattern {
    /// Delegates to [`SystemEntropySource`].
    System,
    /// `0x00, 0x01, 0x02, ...` (mod 256), restarting at `0x00` on every call.
    Sequential,
    /// `start, start + 1, ...` (mod 256), restarting at `start` on every call.
    SequentialFrom(u8),
}

/// Mock entropy source for testing.
///
/// Produces bytes according to a [`MockEntropyPattern`] and can simulate
/// failures via [`MockEntropySourceBehaviour`]. Counts calls and requested
/// bytes; counters live in `Cell`s so a generator holding `&MockEntropySource`
/// can be observed from the outside.
pub struct MockEntropySource {
    inner: SystemEntropySource,
    pattern: MockEntropyPattern,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: Cell<usize>,
    bytes_requested: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock backed by the system source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self::with_pattern(MockEntropyPattern::System, behaviour)
    }

    /// Creates a deterministic mock yielding `0x00, 0x01, ...` on every call.
    pub fn sequential() -> Self {
        Self::with_pattern(MockEntropyPattern::Sequential, MockEntropySourceBehaviour::None)
    }

    /// Creates a mock with an explicit pattern and behavior.
    pub fn with_pattern(pattern: MockEntropyPattern, behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            pattern,
            behaviour,
            fill_bytes_count: Cell::new(0),
            bytes_requested: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call and byte counters.
    pub fn reset_count(&self) {
        self.fill_bytes_count.set(0);
        self.bytes_requested.set(0);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }

    /// Returns the total number of bytes requested so far.
    pub fn bytes_requested(&self) -> usize {
        self.bytes_requested.get()
    }

    fn produce(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        match self.pattern {
            MockEntropyPattern::System => self.inner.fill_bytes(dest),
            MockEntropyPattern::Sequential => {
                fill_sequential(dest, 0);
                Ok(())
            }
            MockEntropyPattern::SequentialFrom(start) => {
                fill_sequential(dest, start);
                Ok(())
            }
        }
    }
}

fn fill_sequential(dest: &mut [u8], start: u8) {
    for (i, byte) in dest.iter_mut().enumerate() {
        *byte = start.wrapping_add(i as u8);
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let current = self.fill_bytes_count.get();
        self.fill_bytes_count.set(current + 1);
        self.bytes_requested.set(self.bytes_requested.get() + dest.len());

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.produce(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailAtNthFillBytes(n) if current + 1 == n => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthFillBytes(_) => self.produce(dest),
        }
    }
}
