//! Error types for the key and hash layer.

use crate::provider::ProviderError;
use thiserror::Error;

/// Result type for key and hash operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while building keys or hashing.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid {buffer} length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("primitive provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
