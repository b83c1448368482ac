//! Shared test helpers for activation key tests.

#![allow(dead_code)]

use keymint_activation::{ActivationKeyGenerator, ActivationKeyProperties};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honouring `RUST_LOG`; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Returns a generator with a fixed RNG seed for reproducible keys.
pub fn seeded_generator(
    properties: &ActivationKeyProperties,
    rng_seed: u64,
) -> ActivationKeyGenerator<StdRng> {
    ActivationKeyGenerator::with_rng(properties, StdRng::seed_from_u64(rng_seed))
}

/// Returns true if `c` can appear in a generated component.
pub fn is_key_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Asserts that `value` consists of `count` components of `length` key
/// characters joined by `separator`.
pub fn assert_components(value: &str, separator: char, length: usize, count: usize) {
    let components: Vec<&str> = value.split(separator).collect();
    assert_eq!(components.len(), count, "component count of {value}");
    for component in components {
        assert_eq!(component.chars().count(), length, "component {component} of {value}");
        assert!(component.chars().all(is_key_char), "component {component} of {value}");
    }
}
