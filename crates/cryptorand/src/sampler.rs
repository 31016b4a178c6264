// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unbiased bounded integers.
//!
//! Reducing a uniform `W`-bit word modulo `bound` favours small results
//! whenever `bound` does not divide `2^W`. Draws below
//! `min = 2^W mod bound` are therefore rejected: the remaining range
//! `[min, 2^W)` has a length that is a multiple of `bound`, so the
//! reduction is exact. `2^W mod bound` equals `(2^W - bound) mod bound`,
//! which is `bound.wrapping_neg() % bound` in `W`-bit arithmetic.
//!
//! Each draw is accepted with probability above 1/2 (worst case at
//! `bound` just above `2^(W-1)`), so fewer than two draws are expected.

use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::traits::EntropySource;

mod private {
    pub trait Sealed {}
}

/// Unsigned word widths the bounded sampler can produce.
///
/// Implemented for `u32` and `u64`. Words are decoded little-endian from the
/// generator's byte stream.
pub trait UniformWord: private::Sealed + Copy + Ord {
    /// Draws one uniform word.
    #[doc(hidden)]
    fn draw<E: EntropySource>(generator: &mut Generator<E>) -> Result<Self, GeneratorError>;

    /// `2^W mod bound`, the smallest accepted draw.
    #[doc(hidden)]
    fn rejection_floor(bound: Self) -> Self;

    /// `value mod bound`.
    #[doc(hidden)]
    fn reduce(value: Self, bound: Self) -> Self;

    /// Whether `bound` is 0 or 1, for which the only answer is 0.
    #[doc(hidden)]
    fn is_trivial_bound(bound: Self) -> bool;

    /// Zero of this width.
    #[doc(hidden)]
    fn zero() -> Self;
}

macro_rules! impl_uniform_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl UniformWord for $ty {
                #[inline(always)]
                fn draw<E: EntropySource>(
                    generator: &mut Generator<E>,
                ) -> Result<Self, GeneratorError> {
                    let mut bytes = [0u8; core::mem::size_of::<$ty>()];
                    generator.fill_bytes(&mut bytes)?;
                    Ok(<$ty>::from_le_bytes(bytes))
                }

                #[inline(always)]
                fn rejection_floor(bound: Self) -> Self {
                    bound.wrapping_neg() % bound
                }

                #[inline(always)]
                fn reduce(value: Self, bound: Self) -> Self {
                    value % bound
                }

                #[inline(always)]
                fn is_trivial_bound(bound: Self) -> bool {
                    bound < 2
                }

                #[inline(always)]
                fn zero() -> Self {
                    0
                }
            }
        )*
    };
}

impl_uniform_word!(u32, u64);

pub(crate) fn uniform_bounded<W: UniformWord, E: EntropySource>(
    generator: &mut Generator<E>,
    bound: W,
) -> Result<W, GeneratorError> {
    if W::is_trivial_bound(bound) {
        return Ok(W::zero());
    }

    let min = W::rejection_floor(bound);

    loop {
        let r = W::draw(generator)?;
        if r >= min {
            return Ok(W::reduce(r, bound));
        }
    }
}

/// Mantissa bits of an IEEE 754 double.
const F64_MANTISSA_MASK: u64 = (1 << 52) - 1;

impl<E: EntropySource> Generator<E> {
    /// Uniform word of width `W`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn next_word<W: UniformWord>(&mut self) -> Result<W, GeneratorError> {
        W::draw(self)
    }

    /// Uniform `u32`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn next_u32(&mut self) -> Result<u32, GeneratorError> {
        self.next_word()
    }

    /// Uniform `u64`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn next_u64(&mut self) -> Result<u64, GeneratorError> {
        self.next_word()
    }

    /// Uniform value in `[0, bound)` without modulo bias; `0` if `bound < 2`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn uniform_bounded<W: UniformWord>(&mut self, bound: W) -> Result<W, GeneratorError> {
        uniform_bounded(self, bound)
    }

    /// Uniform `u32` in `[0, bound)`; `0` if `bound < 2`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use cryptorand::{Algorithm, Generator};
    ///
    /// let mut rng = Generator::from_os(Algorithm::Aes256Ctr).expect("Failed to seed generator");
    /// let card = rng.uniform_u32_bounded(52).expect("Failed to sample");
    ///
    /// assert!(card < 52);
    /// ```
    pub fn uniform_u32_bounded(&mut self, bound: u32) -> Result<u32, GeneratorError> {
        uniform_bounded(self, bound)
    }

    /// Uniform `u64` in `[0, bound)`; `0` if `bound < 2`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn uniform_u64_bounded(&mut self, bound: u64) -> Result<u64, GeneratorError> {
        uniform_bounded(self, bound)
    }

    /// Uniform `f64` in `[0.0, 1.0)` with 52 random mantissa bits.
    ///
    /// Builds a double in `[1.0, 2.0)` by keeping the exponent of `1.0` and
    /// randomizing the mantissa, then subtracts `1.0`.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::fill_bytes`].
    pub fn uniform_f64(&mut self) -> Result<f64, GeneratorError> {
        let mantissa = self.next_u64()? & F64_MANTISSA_MASK;
        Ok(f64::from_bits(1.0f64.to_bits() | mantissa) - 1.0)
    }
}
