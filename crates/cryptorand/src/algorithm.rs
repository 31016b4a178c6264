// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher selection.

use core::fmt;
use core::str::FromStr;

use crate::engine::{aes_ctr, chacha};
use crate::error::GeneratorError;

/// Keystream cipher backing a [`Generator`](crate::Generator).
///
/// | Variant | Key | IV | Block | Selector |
/// |---|---|---|---|---|
/// | [`Algorithm::Aes256Ctr`] | 32 B | 16 B | 16 B | `1` |
/// | [`Algorithm::ChaCha20`] | 32 B | 8 B | 64 B | `2` |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES-256 in counter mode with a 128-bit big-endian counter.
    Aes256Ctr,
    /// ChaCha20 with a 64-bit nonce and 64-bit block counter.
    #[default]
    ChaCha20,
}

impl Algorithm {
    /// Numeric selector for AES-256-CTR.
    pub const AES_256_CTR_SELECTOR: u32 = 1;
    /// Numeric selector for ChaCha20.
    pub const CHACHA20_SELECTOR: u32 = 2;

    /// Resolves a numeric selector.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidAlgorithm`] for anything but `1` or `2`.
    pub fn from_selector(selector: u32) -> Result<Self, GeneratorError> {
        match selector {
            Self::AES_256_CTR_SELECTOR => Ok(Self::Aes256Ctr),
            Self::CHACHA20_SELECTOR => Ok(Self::ChaCha20),
            other => Err(GeneratorError::InvalidAlgorithm(other)),
        }
    }

    /// Numeric selector of this algorithm.
    pub const fn selector(self) -> u32 {
        match self {
            Self::Aes256Ctr => Self::AES_256_CTR_SELECTOR,
            Self::ChaCha20 => Self::CHACHA20_SELECTOR,
        }
    }

    /// Human readable name, also accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes256Ctr => "AES-256-CTR",
            Self::ChaCha20 => "ChaCha20",
        }
    }

    /// Key size in bytes.
    pub const fn key_size(self) -> usize {
        match self {
            Self::Aes256Ctr => aes_ctr::KEY_SIZE,
            Self::ChaCha20 => chacha::KEY_SIZE,
        }
    }

    /// IV size in bytes.
    pub const fn iv_size(self) -> usize {
        match self {
            Self::Aes256Ctr => aes_ctr::IV_SIZE,
            Self::ChaCha20 => chacha::IV_SIZE,
        }
    }

    /// Cipher block size in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            Self::Aes256Ctr => aes_ctr::BLOCK_SIZE,
            Self::ChaCha20 => chacha::BLOCK_SIZE,
        }
    }

    /// Bytes consumed per rekey: key followed by IV.
    pub const fn key_material_size(self) -> usize {
        self.key_size() + self.iv_size()
    }
}

impl TryFrom<u32> for Algorithm {
    type Error = GeneratorError;

    fn try_from(selector: u32) -> Result<Self, Self::Error> {
        Self::from_selector(selector)
    }
}

impl FromStr for Algorithm {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("aes-256-ctr")
            || s.eq_ignore_ascii_case("aes256ctr")
            || s.eq_ignore_ascii_case("aes")
        {
            Ok(Self::Aes256Ctr)
        } else if s.eq_ignore_ascii_case("chacha20") || s.eq_ignore_ascii_case("chacha") {
            Ok(Self::ChaCha20)
        } else {
            Err(GeneratorError::UnknownAlgorithmName)
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
