// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Construction parameters.

use crate::algorithm::Algorithm;
use crate::engine::chacha;
use crate::error::{ConfigError, GeneratorError};
use crate::generator::Generator;
use crate::traits::EntropySource;

/// Default keystream buffer size, in cipher blocks.
pub const DEFAULT_BUFFER_BLOCKS: usize = 16;

/// Smallest accepted keystream buffer, in cipher blocks.
pub const MIN_BUFFER_BLOCKS: usize = 4;

/// Inline keystream storage in bytes: 16 blocks of the widest cipher (ChaCha20).
pub const MAX_CAPACITY: usize = DEFAULT_BUFFER_BLOCKS * chacha::BLOCK_SIZE;

/// Bytes served between two reseeds from the entropy source (128 KiB).
pub const DEFAULT_RESEED_THRESHOLD: usize = 128 * 1024;

/// Parameters for a [`Generator`].
///
/// # Example
///
/// ```rust
/// use cryptorand::{Algorithm, GeneratorConfig};
///
/// let config = GeneratorConfig::new(Algorithm::Aes256Ctr)
///     .with_buffer_blocks(32)
///     .with_reseed_threshold(64 * 1024);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.capacity(), 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Keystream cipher.
    pub algorithm: Algorithm,
    /// Keystream buffer size in blocks of `algorithm`.
    pub buffer_blocks: usize,
    /// Bytes served before fresh entropy is mixed in.
    pub reseed_threshold: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl GeneratorConfig {
    /// Default parameters for `algorithm`.
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            buffer_blocks: DEFAULT_BUFFER_BLOCKS,
            reseed_threshold: DEFAULT_RESEED_THRESHOLD,
        }
    }

    /// Sets the keystream buffer size in cipher blocks.
    pub const fn with_buffer_blocks(mut self, blocks: usize) -> Self {
        self.buffer_blocks = blocks;
        self
    }

    /// Sets the number of bytes served between reseeds.
    pub const fn with_reseed_threshold(mut self, threshold: usize) -> Self {
        self.reseed_threshold = threshold;
        self
    }

    /// Keystream buffer capacity in bytes.
    pub const fn capacity(&self) -> usize {
        self.buffer_blocks.saturating_mul(self.algorithm.block_size())
    }

    /// Checks the parameters.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::BufferBlocksOutOfRange`] if the buffer is fewer than
    ///   [`MIN_BUFFER_BLOCKS`] blocks or larger than [`MAX_CAPACITY`] bytes.
    /// - [`ConfigError::ZeroReseedThreshold`] if `reseed_threshold` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_blocks < MIN_BUFFER_BLOCKS || self.capacity() > MAX_CAPACITY {
            return Err(ConfigError::BufferBlocksOutOfRange {
                blocks: self.buffer_blocks,
                block_size: self.algorithm.block_size(),
            });
        }

        if self.reseed_threshold == 0 {
            return Err(ConfigError::ZeroReseedThreshold);
        }

        // Four blocks always hold key || iv with output left over.
        debug_assert!(self.algorithm.key_material_size() < self.capacity());

        Ok(())
    }
}

/// Step-by-step construction of a [`Generator`].
///
/// # Example
///
/// ```rust
/// use cryptorand::{Algorithm, GeneratorBuilder, SystemEntropySource};
///
/// let mut rng = GeneratorBuilder::new()
///     .algorithm(Algorithm::Aes256Ctr)
///     .reseed_threshold(1 << 20)
///     .entropy_source(SystemEntropySource {})
///     .build()
///     .expect("Failed to build generator");
///
/// let _ = rng.next_u64().expect("Failed to next_u64()");
/// ```
#[derive(Debug)]
pub struct GeneratorBuilder<E: EntropySource> {
    config: GeneratorConfig,
    entropy: Option<E>,
}

impl<E: EntropySource> Default for GeneratorBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntropySource> GeneratorBuilder<E> {
    /// Starts from [`GeneratorConfig::default`] with no entropy source.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            entropy: None,
        }
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Selects the keystream cipher.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Sets the keystream buffer size in cipher blocks.
    pub fn buffer_blocks(mut self, blocks: usize) -> Self {
        self.config.buffer_blocks = blocks;
        self
    }

    /// Sets the number of bytes served between reseeds.
    pub fn reseed_threshold(mut self, threshold: usize) -> Self {
        self.config.reseed_threshold = threshold;
        self
    }

    /// Supplies the entropy source.
    pub fn entropy_source(mut self, entropy: E) -> Self {
        self.entropy = Some(entropy);
        self
    }

    /// Seeds and returns the generator.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEntropySource`] if no entropy source was supplied.
    /// - Any error of [`GeneratorConfig::validate`].
    /// - [`GeneratorError::Entropy`] if the initial seed cannot be read.
    pub fn build(self) -> Result<Generator<E>, GeneratorError> {
        let entropy = self.entropy.ok_or(ConfigError::MissingEntropySource)?;
        Generator::with_config(self.config, entropy)
    }
}
