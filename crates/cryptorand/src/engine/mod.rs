// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keystream cipher backends.
//!
//! The block-cipher math comes from RustCrypto (`aes` + `ctr`, `chacha20`).
//! This module only decides which one runs and how it is rekeyed.

pub(crate) mod aes_ctr;
pub(crate) mod chacha;

use core::fmt;

use crate::algorithm::Algorithm;

use aes_ctr::Aes256CtrCipher;
use chacha::ChaCha20Cipher;

/// Largest `key + iv` of any backend (AES-256-CTR: 32 + 16).
pub(crate) const MAX_KEY_MATERIAL_SIZE: usize = aes_ctr::KEY_SIZE + aes_ctr::IV_SIZE;

/// A stream cipher that can whiten a buffer in place and be rekeyed.
pub(crate) trait KeystreamCipher: Sized {
    const KEY_SIZE: usize;
    const IV_SIZE: usize;

    /// Creates a context from `key` and `iv`.
    ///
    /// # Panics
    ///
    /// Panics if the slices are not exactly `KEY_SIZE` / `IV_SIZE` long.
    fn from_key_iv(key: &[u8], iv: &[u8]) -> Self;

    /// XORs the next `buf.len()` keystream bytes into `buf`, advancing the counter.
    fn encrypt_buffer(&mut self, buf: &mut [u8]);

    /// Replaces the context; the old one is wiped on drop.
    #[inline(always)]
    fn reinit(&mut self, key: &[u8], iv: &[u8]) {
        *self = Self::from_key_iv(key, iv);
    }

    /// Splits `key || iv` and builds a context from it.
    #[inline(always)]
    fn from_key_material(material: &[u8]) -> Self {
        assert_eq!(material.len(), Self::KEY_SIZE + Self::IV_SIZE);
        let (key, iv) = material.split_at(Self::KEY_SIZE);
        Self::from_key_iv(key, iv)
    }

    /// Splits `key || iv` and rekeys from it.
    #[inline(always)]
    fn reinit_from_key_material(&mut self, material: &[u8]) {
        assert_eq!(material.len(), Self::KEY_SIZE + Self::IV_SIZE);
        let (key, iv) = material.split_at(Self::KEY_SIZE);
        self.reinit(key, iv);
    }
}

/// The cipher bound to a generator. The variant never changes after
/// construction; rekeys mutate the context in place.
pub(crate) enum CipherEngine {
    Aes256Ctr(Aes256CtrCipher),
    ChaCha20(ChaCha20Cipher),
}

impl CipherEngine {
    /// Builds the backend for `algorithm` from `key || iv`.
    pub(crate) fn new(algorithm: Algorithm, key_material: &[u8]) -> Self {
        match algorithm {
            Algorithm::Aes256Ctr => {
                Self::Aes256Ctr(Aes256CtrCipher::from_key_material(key_material))
            }
            Algorithm::ChaCha20 => Self::ChaCha20(ChaCha20Cipher::from_key_material(key_material)),
        }
    }

    pub(crate) fn algorithm(&self) -> Algorithm {
        match self {
            Self::Aes256Ctr(_) => Algorithm::Aes256Ctr,
            Self::ChaCha20(_) => Algorithm::ChaCha20,
        }
    }

    #[inline(always)]
    pub(crate) fn key_material_size(&self) -> usize {
        self.algorithm().key_material_size()
    }

    #[inline(always)]
    pub(crate) fn encrypt_buffer(&mut self, buf: &mut [u8]) {
        match self {
            Self::Aes256Ctr(backend) => backend.encrypt_buffer(buf),
            Self::ChaCha20(backend) => backend.encrypt_buffer(buf),
        }
    }

    #[inline(always)]
    pub(crate) fn reinit(&mut self, key_material: &[u8]) {
        match self {
            Self::Aes256Ctr(backend) => backend.reinit_from_key_material(key_material),
            Self::ChaCha20(backend) => backend.reinit_from_key_material(key_material),
        }
    }
}

impl fmt::Debug for CipherEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CipherEngine({}, [REDACTED])", self.algorithm())
    }
}
