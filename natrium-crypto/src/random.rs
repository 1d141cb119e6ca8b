//! Random byte helper.

use crate::constants::RANDOM_BYTES_DEFAULT;
use crate::error::CryptoResult;
use crate::provider::PrimitiveProvider;
use std::sync::Arc;

/// Draws random bytes from the provider's entropy source, e.g. for salts.
#[derive(Clone)]
pub struct Random {
    provider: Arc<dyn PrimitiveProvider>,
}

impl Random {
    pub fn new(provider: Arc<dyn PrimitiveProvider>) -> Self {
        Self { provider }
    }

    pub fn random_bytes(&self, len: usize) -> CryptoResult<Vec<u8>> {
        Ok(self.provider.random_bytes(len)?)
    }

    /// [`RANDOM_BYTES_DEFAULT`] random bytes, which is also a valid scrypt salt.
    pub fn random_default(&self) -> CryptoResult<Vec<u8>> {
        self.random_bytes(RANDOM_BYTES_DEFAULT)
    }
}
