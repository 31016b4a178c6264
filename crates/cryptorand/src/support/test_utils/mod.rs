// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy sources.
//!
//! Provides a mock with deterministic output patterns, failure injection and
//! call counting.

mod mock_entropy_source;

pub use mock_entropy_source::{MockEntropyPattern, MockEntropySource, MockEntropySourceBehaviour};
