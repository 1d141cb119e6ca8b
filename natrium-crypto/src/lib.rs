//! Key pair and hashing layer for natrium.
//!
//! Wraps a [`PrimitiveProvider`] (curve25519, SHA-2, scrypt, PBKDF2, random
//! bytes) with types that keep cryptographic buffers the right size:
//! - [`PrivateKey`] / [`PublicKey`] / [`KeyPair`] for curve25519 box keys
//! - [`Hash`] for SHA-256, SHA-512 and password hashing
//! - [`Encoder`] implementations for hex and base64 text forms
//!
//! # Architecture
//!
//! Nothing here is global. The provider is built once by the host and handed
//! to every consumer as an `Arc<dyn PrimitiveProvider>`:
//!
//! ```
//! use natrium_crypto::{default_provider, Hash, KeyPair, HEX};
//!
//! let provider = default_provider();
//! let hash = Hash::new(provider.clone());
//! assert_eq!(hash.sha256_encoded("", &HEX).len(), 64);
//!
//! let pair = KeyPair::generate(provider).unwrap();
//! assert_eq!(pair.public_key().unwrap().to_bytes().len(), 32);
//! ```
//!
//! Every externally supplied key or salt is length-checked before it reaches
//! the provider. A wrong length is reported as
//! [`CryptoError::InvalidKeyLength`]; nothing is truncated or padded.

pub mod config;
pub mod constants;
pub mod encoder;
mod error;
pub mod hash;
pub mod keys;
pub mod provider;
pub mod random;
pub mod validate;

pub use config::HashConfig;
pub use constants::{PUBLICKEY_BYTES, SECRETKEY_BYTES, SHA256BYTES, SHA512BYTES};
pub use encoder::{Base64, Encoder, Hex, BASE64, HEX};
pub use error::{CryptoError, CryptoResult};
pub use hash::Hash;
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use provider::{
    default_provider, PrimitiveProvider, ProviderError, ProviderResult, RustCryptoProvider,
};
pub use random::Random;
pub use validate::check_length;
