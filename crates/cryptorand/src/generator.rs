// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use tracing::{debug, error, trace};
use zeroize::Zeroizing;

use crate::algorithm::Algorithm;
use crate::buffer::KeystreamBuffer;
use crate::config::GeneratorConfig;
use crate::engine::{CipherEngine, MAX_KEY_MATERIAL_SIZE};
use crate::error::{ConfigError, GeneratorError};
use crate::rekey::rekey;
use crate::reseed::ReseedPolicy;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Cryptographically secure random number generator.
///
/// Serves bytes from a keystream buffer, rekeying from its own keystream
/// whenever the buffer runs dry and mixing in fresh entropy every
/// `reseed_threshold` bytes (128 KiB by default).
///
/// # Security
///
/// - **Backtracking resistance**: the key producing future output is carved
///   out of keystream that is wiped before anything else is served.
/// - **No copies**: `Generator` is neither `Clone` nor `Copy`; a copy would
///   duplicate key material and replay the same output.
/// - **Fail closed**: if the entropy source fails during a reseed the call
///   returns [`GeneratorError::Entropy`] and the generator refuses all
///   further output with [`GeneratorError::Poisoned`].
///
/// ```compile_fail
/// use cryptorand::{Algorithm, Generator};
///
/// let rng = Generator::from_os(Algorithm::ChaCha20).unwrap();
/// let twin = rng.clone();
/// ```
///
/// # Example
///
/// ```rust
/// use cryptorand::{Generator, SystemEntropySource};
///
/// // Selector 1 = AES-256-CTR, 2 = ChaCha20
/// let mut rng = Generator::init(1, Some(SystemEntropySource {}))
///     .expect("Failed to init generator");
///
/// let mut nonce = [0u8; 24];
/// rng.fill_bytes(&mut nonce).expect("Failed to fill_bytes(..)");
/// ```
pub struct Generator<E: EntropySource> {
    buffer: KeystreamBuffer,
    reseed: ReseedPolicy,
    cipher: CipherEngine,
    entropy: E,
    poisoned: bool,
}

impl Generator<SystemEntropySource> {
    /// Creates a generator seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Entropy`] if the OS entropy source fails.
    pub fn from_os(algorithm: Algorithm) -> Result<Self, GeneratorError> {
        Self::new(algorithm, SystemEntropySource {})
    }
}

impl<E: EntropySource> Generator<E> {
    /// Creates a generator from a numeric algorithm selector
    /// (`1` = AES-256-CTR, `2` = ChaCha20) and an optional entropy source.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingEntropySource`] if `entropy` is `None`.
    /// - [`GeneratorError::InvalidAlgorithm`] for an unknown selector.
    /// - [`GeneratorError::Entropy`] if the initial seed cannot be read.
    pub fn init(selector: u32, entropy: Option<E>) -> Result<Self, GeneratorError> {
        let entropy = entropy.ok_or(ConfigError::MissingEntropySource)?;
        let algorithm = Algorithm::from_selector(selector)?;

        Self::new(algorithm, entropy)
    }

    /// Creates a generator with default parameters for `algorithm`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Entropy`] if the initial seed cannot be read.
    pub fn new(algorithm: Algorithm, entropy: E) -> Result<Self, GeneratorError> {
        Self::with_config(GeneratorConfig::new(algorithm), entropy)
    }

    /// Creates a generator from explicit parameters.
    ///
    /// Reads `key + iv` bytes of entropy to key the cipher, then runs one
    /// rekey over the zeroed buffer; raw entropy never keys output directly.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Configuration`] if `config` is invalid.
    /// - [`GeneratorError::Entropy`] if the initial seed cannot be read.
    pub fn with_config(config: GeneratorConfig, entropy: E) -> Result<Self, GeneratorError> {
        config.validate()?;

        let algorithm = config.algorithm;
        let key_len = algorithm.key_material_size();

        let mut seed = Zeroizing::new([0u8; MAX_KEY_MATERIAL_SIZE]);
        if let Err(err) = entropy.fill_bytes(&mut seed[..key_len]) {
            error!(error = %err, %algorithm, "entropy source failed while seeding generator");
            return Err(err.into());
        }

        let cipher = CipherEngine::new(algorithm, &seed[..key_len]);
        drop(seed);

        let mut generator = Self {
            buffer: KeystreamBuffer::new(config.capacity()),
            reseed: ReseedPolicy::new(config.reseed_threshold),
            cipher,
            entropy,
            poisoned: false,
        };

        rekey(&mut generator.cipher, &mut generator.buffer, None);

        debug!(
            %algorithm,
            capacity = config.capacity(),
            reseed_threshold = config.reseed_threshold,
            "generator initialized"
        );

        Ok(generator)
    }

    /// Fills `dest` entirely with pseudorandom bytes.
    ///
    /// Any length is accepted; requests larger than the internal buffer
    /// rekey as many times as needed.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::Entropy`] if a due reseed could not read entropy.
    ///   `dest` is left untouched and the generator becomes poisoned.
    /// - [`GeneratorError::Poisoned`] if an earlier reseed failed.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), GeneratorError> {
        if self.poisoned {
            return Err(GeneratorError::Poisoned);
        }

        self.stir_if_needed(dest.len())?;

        let mut filled = 0;
        while filled < dest.len() {
            if self.buffer.is_exhausted() {
                trace!("keystream buffer exhausted");
                rekey(&mut self.cipher, &mut self.buffer, None);
            }

            filled += self.buffer.take(&mut dest[filled..]);
        }

        Ok(())
    }

    /// Cipher selected at construction.
    pub fn algorithm(&self) -> Algorithm {
        self.cipher.algorithm()
    }

    /// Keystream buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Bytes served between reseeds.
    pub fn reseed_threshold(&self) -> usize {
        self.reseed.threshold()
    }

    /// Whether an entropy failure has disabled this generator.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    /// The entropy source this generator reseeds from.
    pub fn entropy_source(&self) -> &E {
        &self.entropy
    }

    fn stir_if_needed(&mut self, len: usize) -> Result<(), GeneratorError> {
        if self.reseed.is_due(len) {
            self.stir()?;
        }

        self.reseed.charge(len);

        Ok(())
    }

    /// Rekeys with fresh entropy mixed in, discards all buffered keystream and
    /// restarts the countdown.
    fn stir(&mut self) -> Result<(), GeneratorError> {
        let key_len = self.cipher.key_material_size();
        let mut seed = Zeroizing::new([0u8; MAX_KEY_MATERIAL_SIZE]);

        if let Err(err) = self.entropy.fill_bytes(&mut seed[..key_len]) {
            self.poison();
            error!(error = %err, "entropy source failed during reseed; generator disabled");
            return Err(err.into());
        }

        rekey(&mut self.cipher, &mut self.buffer, Some(&mut seed[..key_len]));

        self.buffer.invalidate();
        self.reseed.reset();

        debug!(algorithm = %self.cipher.algorithm(), "reseeded from entropy source");

        Ok(())
    }

    fn poison(&mut self) {
        self.poisoned = true;
        self.buffer.invalidate();
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &KeystreamBuffer {
        &self.buffer
    }

    #[cfg(test)]
    pub(crate) fn reseed_policy(&self) -> &ReseedPolicy {
        &self.reseed
    }

    #[cfg(test)]
    pub(crate) fn force_rekey_for_test(&mut self) {
        rekey(&mut self.cipher, &mut self.buffer, None);
    }
}

impl<E: EntropySource> fmt::Debug for Generator<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("algorithm", &self.cipher.algorithm())
            .field("capacity", &self.buffer.capacity())
            .field("poisoned", &self.poisoned)
            .finish_non_exhaustive()
    }
}
