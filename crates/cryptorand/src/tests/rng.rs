// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rand_core::{CryptoRng, RngCore, TryCryptoRng, TryRngCore, UnwrapErr};

use crate::algorithm::Algorithm;
use crate::error::GeneratorError;
use crate::generator::Generator;
use crate::support::test_utils::{
    MockEntropyPattern, MockEntropySource, MockEntropySourceBehaviour,
};

fn sequential(algorithm: Algorithm) -> Generator<MockEntropySource> {
    Generator::new(algorithm, MockEntropySource::sequential()).expect("Failed to new(..)")
}

fn draw_key<R: TryCryptoRng>(rng: &mut R) -> Result<[u8; 32], R::Error> {
    let mut key = [0u8; 32];
    rng.try_fill_bytes(&mut key)?;
    Ok(key)
}

fn roll<R: CryptoRng>(rng: &mut R) -> u32 {
    rng.next_u32() % 6
}

#[test]
fn test_try_rng_core_matches_inherent_api() {
    let mut a = sequential(Algorithm::ChaCha20);
    let mut b = sequential(Algorithm::ChaCha20);

    let mut via_trait = [0u8; 300];
    let mut inherent = [0u8; 300];
    a.try_fill_bytes(&mut via_trait).expect("Failed to try_fill_bytes(..)");
    b.fill_bytes(&mut inherent).expect("Failed to fill_bytes(..)");
    assert_eq!(via_trait, inherent);

    assert_eq!(a.try_next_u32(), b.next_u32());
    assert_eq!(a.try_next_u64(), b.next_u64());
}

#[test]
fn test_try_crypto_rng_bound() {
    let mut a = sequential(Algorithm::Aes256Ctr);
    let mut b = sequential(Algorithm::Aes256Ctr);

    let key = draw_key(&mut a).expect("Failed to draw_key(..)");
    let mut expected = [0u8; 32];
    b.fill_bytes(&mut expected).expect("Failed to fill_bytes(..)");

    assert_eq!(key, expected);
}

#[test]
fn test_unwrap_err_adapter() {
    let mut rng = UnwrapErr(sequential(Algorithm::Aes256Ctr));

    assert_eq!(rng.next_u32(), 4_223_063_879);
    assert!(roll(&mut rng) < 6);
}

#[test]
fn test_try_rng_core_reports_errors() {
    let mut rng = Generator::new(
        Algorithm::Aes256Ctr,
        MockEntropySource::with_pattern(
            MockEntropyPattern::Sequential,
            MockEntropySourceBehaviour::FailAtNthFillBytes(2),
        ),
    )
    .expect("Failed to new(..)");

    assert!(matches!(rng.try_next_u32(), Err(GeneratorError::Entropy(_))));
    assert_eq!(rng.try_next_u64(), Err(GeneratorError::Poisoned));
    assert!(matches!(draw_key(&mut rng), Err(GeneratorError::Poisoned)));
}
