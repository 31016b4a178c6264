// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::buffer::KeystreamBuffer;

fn filled_buffer(capacity: usize, byte: u8) -> KeystreamBuffer {
    let mut buffer = KeystreamBuffer::new(capacity);
    buffer.active_mut().fill(byte);
    buffer
}

#[test]
fn test_new_buffer_is_zeroed_and_exhausted() {
    let buffer = KeystreamBuffer::new(256);

    assert_eq!(buffer.capacity(), 256);
    assert_eq!(buffer.cursor(), 256);
    assert_eq!(buffer.available(), 0);
    assert!(buffer.is_exhausted());
    assert!(buffer.is_zeroed());
}

#[test]
#[should_panic(expected = "capacity exceeds inline storage")]
fn test_new_buffer_rejects_oversized_capacity() {
    let _ = KeystreamBuffer::new(crate::config::MAX_CAPACITY + 1);
}

#[test]
fn test_erase_key_region_zeroes_and_moves_cursor() {
    let mut buffer = filled_buffer(256, 0xAA);

    buffer.erase_key_region(48);

    assert_eq!(buffer.cursor(), 48);
    assert_eq!(buffer.available(), 208);
    assert!(buffer.key_region(48).iter().all(|b| *b == 0));
    assert!(buffer.as_slice()[48..].iter().all(|b| *b == 0xAA));
}

#[test]
fn test_erase_key_region_records_erased_bytes() {
    let mut buffer = filled_buffer(256, 0x5C);

    buffer.erase_key_region(40);

    assert_eq!(buffer.erased_key_regions.len(), 1);
    assert_eq!(buffer.erased_key_regions[0], vec![0x5C; 40]);
}

#[test]
fn test_take_wipes_handed_out_bytes() {
    let mut buffer = filled_buffer(256, 0xAA);
    buffer.erase_key_region(48);

    let mut out = [0u8; 100];
    let taken = buffer.take(&mut out);

    assert_eq!(taken, 100);
    assert!(out.iter().all(|b| *b == 0xAA));
    assert_eq!(buffer.cursor(), 148);

    // Assert zeroization!
    assert!(buffer.as_slice()[..148].iter().all(|b| *b == 0));
    assert!(buffer.as_slice()[148..].iter().all(|b| *b == 0xAA));
}

#[test]
fn test_take_stops_at_capacity() {
    let mut buffer = filled_buffer(256, 0x11);
    buffer.erase_key_region(48);

    let mut out = [0u8; 1000];
    let taken = buffer.take(&mut out);

    assert_eq!(taken, 208);
    assert!(out[..208].iter().all(|b| *b == 0x11));
    assert!(out[208..].iter().all(|b| *b == 0));
    assert!(buffer.is_exhausted());
    assert!(buffer.is_zeroed());
}

#[test]
fn test_take_from_exhausted_buffer_returns_zero() {
    let mut buffer = KeystreamBuffer::new(256);
    let mut out = [0xFFu8; 8];

    assert_eq!(buffer.take(&mut out), 0);
    assert_eq!(out, [0xFF; 8]);
}

#[test]
fn test_mix_seed_xors_and_wipes_seed() {
    let mut buffer = filled_buffer(256, 0x0F);
    let mut seed = [0xF0u8; 48];

    buffer.mix_seed(&mut seed);

    assert!(buffer.as_slice()[..48].iter().all(|b| *b == 0xFF));
    assert!(buffer.as_slice()[48..].iter().all(|b| *b == 0x0F));

    // Assert zeroization!
    assert!(seed.iter().all(|b| *b == 0));
}

#[test]
fn test_mix_seed_longer_than_capacity_is_truncated() {
    let mut buffer = KeystreamBuffer::new(256);
    let mut seed = vec![0xFFu8; 300];

    buffer.mix_seed(&mut seed);

    assert!(buffer.as_slice().iter().all(|b| *b == 0xFF));

    // The whole seed is wiped, not only the mixed prefix
    assert!(seed.iter().all(|b| *b == 0));
}

#[test]
fn test_invalidate_wipes_everything() {
    let mut buffer = filled_buffer(1024, 0x77);
    buffer.erase_key_region(40);

    buffer.invalidate();

    assert!(buffer.is_exhausted());
    assert!(buffer.is_zeroed());
}

#[test]
fn test_buffer_debug_is_redacted() {
    let buffer = filled_buffer(256, 0x42);
    let debug = format!("{:?}", buffer);

    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("66"));
}
