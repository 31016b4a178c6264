// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cryptorand
//!
//! Backtracking-resistant cryptographic random number generation over an
//! AES-256-CTR or ChaCha20 keystream, in the spirit of OpenBSD `arc4random`.
//!
//! ## Core Types
//!
//! - [`Generator`]: the CSPRNG state (keystream buffer, cursor, reseed countdown, cipher)
//! - [`Algorithm`]: cipher selector, fixed for the lifetime of a generator
//! - [`GeneratorConfig`] / [`GeneratorBuilder`]: construction parameters
//! - [`SystemEntropySource`]: OS-level entropy (via `getrandom`)
//! - [`CallbackEntropySource`]: adapter for `0 = ok` style entropy callbacks
//!
//! ## Traits
//!
//! - [`EntropySource`]: interface for external entropy
//! - [`UniformWord`]: integer widths supported by the bounded sampler
//!
//! ## How it works
//!
//! The generator keeps a small buffer of keystream. Every time the buffer
//! runs dry it is re-encrypted under the current key, and the first
//! `key + iv` bytes of the result become the next key. Those bytes are wiped
//! before anything else is handed out, so captured output never reveals the
//! key that produces later output. Every 128 KiB (configurable) fresh
//! entropy is mixed into that derivation.
//!
//! ## Example
//!
//! ```rust
//! use cryptorand::{Algorithm, Generator};
//!
//! let mut rng = Generator::from_os(Algorithm::ChaCha20).expect("Failed to seed generator");
//!
//! let mut key = [0u8; 32];
//! rng.fill_bytes(&mut key).expect("Failed to fill_bytes(..)");
//!
//! let die = rng.uniform_u32_bounded(6).expect("Failed to sample") + 1;
//! assert!((1..=6).contains(&die));
//! ```
//!
//! ## Concurrency
//!
//! All operations take `&mut self`. Share a generator between threads behind
//! a lock, or give each thread its own instance.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod algorithm;
mod buffer;
mod callback;
mod config;
mod engine;
mod error;
mod generator;
mod rekey;
mod reseed;
mod rng;
mod sampler;
mod support;
mod system;
mod traits;

pub use algorithm::Algorithm;
pub use callback::CallbackEntropySource;
pub use config::{
    DEFAULT_BUFFER_BLOCKS, DEFAULT_RESEED_THRESHOLD, GeneratorBuilder, GeneratorConfig,
    MAX_CAPACITY, MIN_BUFFER_BLOCKS,
};
pub use error::{ConfigError, EntropyError, GeneratorError};
pub use generator::Generator;
pub use sampler::UniformWord;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
