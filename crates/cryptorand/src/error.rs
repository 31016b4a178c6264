// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors reported by an [`EntropySource`](crate::EntropySource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,

    /// An entropy callback returned a nonzero status code.
    #[error("entropy callback failed with status {0}")]
    CallbackFailed(i32),
}

/// Invalid generator construction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No entropy source was supplied.
    #[error("no entropy source supplied")]
    MissingEntropySource,

    /// The keystream buffer would be fewer than four cipher blocks, or larger
    /// than the inline storage.
    #[error("buffer of {blocks} blocks x {block_size} bytes is out of range")]
    BufferBlocksOutOfRange {
        /// Requested number of cipher blocks.
        blocks: usize,
        /// Block size of the selected cipher.
        block_size: usize,
    },

    /// A reseed threshold of zero would reseed on every request and never
    /// serve keystream from the buffer.
    #[error("reseed threshold must be greater than zero")]
    ZeroReseedThreshold,
}

/// Errors returned by [`Generator`](crate::Generator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Construction parameters were rejected.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The numeric algorithm selector is not one of the supported ciphers.
    #[error("invalid algorithm selector: {0}")]
    InvalidAlgorithm(u32),

    /// The algorithm name is not one of the supported ciphers.
    #[error("unknown algorithm name")]
    UnknownAlgorithmName,

    /// The entropy source failed while seeding or reseeding.
    ///
    /// Fatal for the generator: every later output request returns
    /// [`GeneratorError::Poisoned`].
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),

    /// A previous reseed failed; the generator refuses to produce output.
    #[error("generator disabled after an entropy failure")]
    Poisoned,
}
