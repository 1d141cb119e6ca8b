//! Shared helpers for integration tests.
#![allow(dead_code)]

use natrium_crypto::{default_provider, Hash, PrimitiveProvider};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Controlled by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn provider() -> Arc<dyn PrimitiveProvider> {
    init_tracing();
    default_provider()
}

pub fn hasher() -> Hash {
    Hash::new(provider())
}

/// Deterministic 32-byte salt, distinct per `seed`.
pub fn fixed_salt(seed: u8) -> [u8; 32] {
    let mut salt = [0u8; 32];
    for (i, b) in salt.iter_mut().enumerate() {
        *b = seed.wrapping_add(i as u8);
    }
    salt
}

/// RFC 7748 section 6.1 test key pairs as `(secret, public)` hex.
pub const ALICE: (&str, &str) = (
    "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
);
pub const BOB: (&str, &str) = (
    "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
);
