//! Code generator tests
//!
//! The generator is a pure component; the probe predicate stands in for
//! the store here.

use std::cell::Cell;
use std::collections::HashSet;

use minilink::errors::MinilinkError;
use minilink::generator::{CODE_ALPHABET, CodeGenerator};

#[test]
fn test_codes_have_requested_length_and_charset() {
    for length in [1, 4, 6, 12] {
        let generator = CodeGenerator::new(length, 32);
        let code = generator.random_code();
        assert_eq!(code.len(), length);
        assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
    }
}

#[test]
fn test_draws_are_reasonably_distinct() {
    let generator = CodeGenerator::new(6, 32);
    let codes: HashSet<String> = (0..1000).map(|_| generator.random_code()).collect();
    // 62^6 keyspace: a duplicate in 1000 draws means a broken RNG
    assert_eq!(codes.len(), 1000);
}

#[test]
fn test_generate_retries_past_collisions() {
    let generator = CodeGenerator::new(6, 32);

    // First three probes collide, then the keyspace is free
    let remaining_collisions = Cell::new(3u32);
    let code = generator
        .generate(|_| {
            if remaining_collisions.get() > 0 {
                remaining_collisions.set(remaining_collisions.get() - 1);
                true
            } else {
                false
            }
        })
        .unwrap();

    assert_eq!(code.len(), 6);
    assert_eq!(remaining_collisions.get(), 0);
}

#[test]
fn test_generate_is_bounded() {
    let generator = CodeGenerator::new(6, 5);

    let probes = Cell::new(0u32);
    let err = generator
        .generate(|_| {
            probes.set(probes.get() + 1);
            true
        })
        .unwrap_err();

    assert!(matches!(err, MinilinkError::KeyspaceExhausted(_)));
    assert_eq!(probes.get(), 5);
}
