// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `rand_core` integration.
//!
//! [`Generator`] implements the fallible [`TryRngCore`] / [`TryCryptoRng`]
//! traits. Wrap it in [`rand_core::UnwrapErr`] where an infallible
//! [`rand_core::RngCore`] is required; that wrapper panics on entropy failure.

use rand_core::{TryCryptoRng, TryRngCore};

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::traits::EntropySource;

impl<E: EntropySource> TryRngCore for Generator<E> {
    type Error = GeneratorError;

    #[inline]
    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        self.next_u32()
    }

    #[inline]
    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        self.next_u64()
    }

    #[inline]
    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.fill_bytes(dst)
    }
}

impl<E: EntropySource> TryCryptoRng for Generator<E> {}
