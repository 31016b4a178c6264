// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::callback::CallbackEntropySource;
use crate::error::{EntropyError, GeneratorError};
use crate::generator::Generator;
use crate::traits::EntropySource;

fn counting_callback(buf: &mut [u8]) -> i32 {
    for (i, byte) in buf.iter_mut().enumerate() {
        *byte = i as u8;
    }
    0
}

#[test]
fn test_callback_status_zero_fills() {
    let source = CallbackEntropySource::new(counting_callback);
    let mut buf = [0xFFu8; 8];

    let result = source.fill_bytes(&mut buf);

    assert!(result.is_ok());
    assert_eq!(buf, [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_callback_nonzero_status_is_error() {
    let source = CallbackEntropySource::new(|_: &mut [u8]| -5);
    let mut buf = [0u8; 8];

    let result = source.fill_bytes(&mut buf);

    assert!(result.is_err());
    assert_eq!(result, Err(EntropyError::CallbackFailed(-5)));
}

#[test]
fn test_callback_debug_hides_closure() {
    let source = CallbackEntropySource::new(counting_callback);

    assert_eq!(format!("{:?}", source), "CallbackEntropySource { .. }");
}

#[test]
fn test_init_with_callback_source() {
    let source = CallbackEntropySource::new(counting_callback);
    let mut rng = Generator::init(1, Some(source)).expect("Failed to init(..)");

    let mut out = [0u8; 16];
    rng.fill_bytes(&mut out).expect("Failed to fill_bytes(..)");

    assert_eq!(
        out,
        [
            0x47, 0xd7, 0xb6, 0xfb, 0x36, 0x63, 0xbc, 0xee, 0xe5, 0x87, 0xe7, 0x1b, 0x1d, 0xd0,
            0x0c, 0xe9,
        ]
    );
}

#[test]
fn test_callback_failure_during_reseed() {
    let calls = Cell::new(0);
    let source = CallbackEntropySource::new(|buf: &mut [u8]| {
        calls.set(calls.get() + 1);
        if calls.get() > 1 {
            return 7;
        }
        counting_callback(buf)
    });

    let mut rng = Generator::init(2, Some(source)).expect("Failed to init(..)");
    let mut out = [0u8; 4];

    assert_eq!(
        rng.fill_bytes(&mut out),
        Err(GeneratorError::Entropy(EntropyError::CallbackFailed(7)))
    );
    assert_eq!(rng.fill_bytes(&mut out), Err(GeneratorError::Poisoned));
    assert_eq!(calls.get(), 2);
}
