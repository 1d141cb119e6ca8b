//! Primitive provider boundary.
//!
//! Key and hash types never call a cryptographic library directly; they go
//! through [`PrimitiveProvider`]. The default implementation,
//! [`RustCryptoProvider`], binds to the RustCrypto crates. An FFI binding to
//! a C library can be dropped in behind the same trait.

mod rust_crypto;
pub mod scrypt_params;

pub use rust_crypto::RustCryptoProvider;

use crate::constants::{PUBLICKEY_BYTES, SECRETKEY_BYTES, SHA256BYTES, SHA512BYTES};
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Failures reported by the primitive provider.
///
/// These indicate a programming error (bad parameters) or a broken platform
/// (no entropy), never a transient condition, so callers should not retry.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("primitive unavailable: {0}")]
    Unavailable(String),
}

/// Fixed-size cryptographic operations consumed by the key and hash layer.
///
/// Implementations must be safe to share across threads; in particular the
/// entropy source behind [`keypair_generate`](Self::keypair_generate) and
/// [`random_bytes`](Self::random_bytes) must tolerate concurrent callers.
/// Every method allocates its own output and leaves inputs untouched.
pub trait PrimitiveProvider: Send + Sync {
    fn hash_sha256(&self, message: &[u8]) -> [u8; SHA256BYTES];

    fn hash_sha512(&self, message: &[u8]) -> [u8; SHA512BYTES];

    /// scrypt (Salsa20/8, SHA-256) with libsodium `opslimit`/`memlimit` cost
    /// parameters, producing `out_len` bytes.
    fn kdf_scrypt(
        &self,
        password: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
        out_len: usize,
    ) -> ProviderResult<Vec<u8>>;

    /// PBKDF2 with HMAC-SHA-256, producing `out_len` bytes.
    fn kdf_pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out_len: usize,
    ) -> ProviderResult<Vec<u8>>;

    /// Generates a fresh curve25519 box key pair as `(secret, public)`.
    fn keypair_generate(&self) -> ProviderResult<([u8; SECRETKEY_BYTES], [u8; PUBLICKEY_BYTES])>;

    /// Multiplies the curve25519 base point by `secret`.
    fn scalar_mult_base(
        &self,
        secret: &[u8; SECRETKEY_BYTES],
    ) -> ProviderResult<[u8; PUBLICKEY_BYTES]>;

    fn random_bytes(&self, len: usize) -> ProviderResult<Vec<u8>>;
}

/// Builds the default provider, ready to hand to [`Hash`](crate::Hash) and
/// [`KeyPair`](crate::KeyPair).
pub fn default_provider() -> Arc<dyn PrimitiveProvider> {
    Arc::new(RustCryptoProvider::new())
}
