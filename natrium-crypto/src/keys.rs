//! Curve25519 box keys.
//!
//! [`PrivateKey`] and [`PublicKey`] are immutable 32-byte values. Their
//! accessors hand out copies, so no caller can mutate key material in place.
//! [`KeyPair`] pairs a private key with an optional public key and derives
//! the public half on demand when it was not supplied.

use crate::constants::{PUBLICKEY_BYTES, SECRETKEY_BYTES};
use crate::encoder::Encoder;
use crate::error::CryptoResult;
use crate::provider::PrimitiveProvider;
use crate::validate::to_array;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// A curve25519 secret scalar.
///
/// Zeroized on drop. `Debug` never prints the bytes. Cloning produces an
/// independent copy that is zeroized on its own drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; SECRETKEY_BYTES],
}

impl PrivateKey {
    /// Builds a private key from exactly [`SECRETKEY_BYTES`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        Ok(Self {
            bytes: to_array(bytes, "secret key")?,
        })
    }

    /// Decodes `text` with `encoder`, then validates it like [`from_bytes`](Self::from_bytes).
    pub fn from_encoded(text: &str, encoder: &dyn Encoder) -> CryptoResult<Self> {
        let decoded = Zeroizing::new(encoder.decode(text)?);
        Self::from_bytes(&decoded)
    }

    /// Returns a copy of the secret bytes.
    pub fn to_bytes(&self) -> [u8; SECRETKEY_BYTES] {
        self.bytes
    }

    pub fn to_encoded(&self, encoder: &dyn Encoder) -> String {
        encoder.encode(&self.bytes)
    }

    pub(crate) fn as_array(&self) -> &[u8; SECRETKEY_BYTES] {
        &self.bytes
    }
}

impl From<[u8; SECRETKEY_BYTES]> for PrivateKey {
    fn from(bytes: [u8; SECRETKEY_BYTES]) -> Self {
        Self { bytes }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

/// A curve25519 public point. Displays as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; PUBLICKEY_BYTES],
}

impl PublicKey {
    /// Builds a public key from exactly [`PUBLICKEY_BYTES`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        Ok(Self {
            bytes: to_array(bytes, "public key")?,
        })
    }

    pub fn from_encoded(text: &str, encoder: &dyn Encoder) -> CryptoResult<Self> {
        Self::from_bytes(&encoder.decode(text)?)
    }

    /// Returns a copy of the public key bytes.
    pub fn to_bytes(&self) -> [u8; PUBLICKEY_BYTES] {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8; PUBLICKEY_BYTES] {
        &self.bytes
    }

    pub fn to_encoded(&self, encoder: &dyn Encoder) -> String {
        encoder.encode(&self.bytes)
    }
}

impl From<[u8; PUBLICKEY_BYTES]> for PublicKey {
    fn from(bytes: [u8; PUBLICKEY_BYTES]) -> Self {
        Self { bytes }
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.bytes))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

/// A private key plus, optionally, its public key.
///
/// When the public key was not supplied, [`public_key`](Self::public_key)
/// derives it from the private key on every call. Derivation is
/// deterministic, so repeated calls always agree.
///
/// [`from_keys`](Self::from_keys) does **not** check that the two halves
/// belong together. Callers that pair keys from different sources are
/// responsible for that.
#[derive(Clone)]
pub struct KeyPair {
    provider: Arc<dyn PrimitiveProvider>,
    secret: PrivateKey,
    public: Option<PublicKey>,
}

impl KeyPair {
    /// Generates a fresh random key pair. Both halves are populated.
    pub fn generate(provider: Arc<dyn PrimitiveProvider>) -> CryptoResult<Self> {
        let (secret, public) = provider.keypair_generate()?;
        let secret = Zeroizing::new(secret);
        debug!("generated curve25519 key pair");
        Ok(Self {
            provider,
            secret: PrivateKey::from(*secret),
            public: Some(PublicKey::from(public)),
        })
    }

    /// Builds a key pair from a secret key alone. The public key is derived
    /// lazily.
    pub fn from_secret_key(
        provider: Arc<dyn PrimitiveProvider>,
        secret_key: &[u8],
    ) -> CryptoResult<Self> {
        let secret = PrivateKey::from_bytes(secret_key)?;
        Ok(Self {
            provider,
            secret,
            public: None,
        })
    }

    /// Builds a key pair from both halves. Lengths are validated
    /// independently; the halves are stored as given.
    pub fn from_keys(
        provider: Arc<dyn PrimitiveProvider>,
        secret_key: &[u8],
        public_key: &[u8],
    ) -> CryptoResult<Self> {
        let secret = PrivateKey::from_bytes(secret_key)?;
        let public = PublicKey::from_bytes(public_key)?;
        Ok(Self {
            provider,
            secret,
            public: Some(public),
        })
    }

    pub fn from_encoded_secret_key(
        provider: Arc<dyn PrimitiveProvider>,
        secret_key: &str,
        encoder: &dyn Encoder,
    ) -> CryptoResult<Self> {
        let secret = Zeroizing::new(encoder.decode(secret_key)?);
        Self::from_secret_key(provider, &secret)
    }

    pub fn from_encoded_keys(
        provider: Arc<dyn PrimitiveProvider>,
        secret_key: &str,
        public_key: &str,
        encoder: &dyn Encoder,
    ) -> CryptoResult<Self> {
        let secret = Zeroizing::new(encoder.decode(secret_key)?);
        let public = encoder.decode(public_key)?;
        Self::from_keys(provider, &secret, &public)
    }

    /// Returns the stored public key, or derives it by scalar multiplication
    /// of the curve base point with the secret key.
    pub fn public_key(&self) -> CryptoResult<PublicKey> {
        if let Some(public) = &self.public {
            return Ok(public.clone());
        }
        debug!("deriving public key from secret key");
        let bytes = self.provider.scalar_mult_base(self.secret.as_array())?;
        Ok(PublicKey::from(bytes))
    }

    pub fn private_key(&self) -> PrivateKey {
        self.secret.clone()
    }

    /// Whether a public key was generated or supplied at construction.
    pub fn has_public_key(&self) -> bool {
        self.public.is_some()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("secret", &self.secret)
            .field("public", &self.public)
            .finish()
    }
}
