//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use chameleon_hash::primitives::sampler;
use chameleon_hash::{Curve, KeyPair, SecretKey, SecureRng};

/// Initialize test tracing (call once at the beginning of tests).
///
/// Library debug logs go to the test writer; subsequent calls are ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("chameleon_hash=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

/// Key pair from a fresh random secret. Key generation is the caller's job, so tests do it here.
pub fn key_pair<C: Curve>(rng: &mut SecureRng) -> KeyPair<C> {
    let x = sampler::random_scalar::<C, _>(rng).expect("OS entropy should be available");
    KeyPair::from_secret(SecretKey::new(x).expect("sampled scalars are non-zero"))
}
