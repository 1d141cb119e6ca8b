//! Stateless hashing and password-hashing façade.
//!
//! Each method is a pure function of its inputs and the provider. Digest
//! lengths are fixed by the algorithm; there is no way to ask for fewer or
//! more bytes. The `_encoded` and password-hashing methods are conveniences
//! layered on the raw byte methods and never alter the underlying bytes.

use crate::config::HashConfig;
use crate::constants::{
    PBKDF2_SHA256_BYTES, SCRYPT_KEY_BYTES, SCRYPT_SALTBYTES, SHA256BYTES, SHA512BYTES,
};
use crate::encoder::Encoder;
use crate::error::{CryptoError, CryptoResult};
use crate::provider::{PrimitiveProvider, ProviderError};
use crate::validate::check_length;
use std::sync::Arc;
use zeroize::Zeroizing;

/// Hash wrapper over a [`PrimitiveProvider`].
#[derive(Clone)]
pub struct Hash {
    provider: Arc<dyn PrimitiveProvider>,
    config: HashConfig,
}

impl Hash {
    /// Creates a hasher with [`HashConfig::default`] password-hashing costs.
    pub fn new(provider: Arc<dyn PrimitiveProvider>) -> Self {
        Self {
            provider,
            config: HashConfig::default(),
        }
    }

    /// Creates a hasher with explicit password-hashing costs. The config is
    /// validated up front.
    pub fn with_config(
        provider: Arc<dyn PrimitiveProvider>,
        config: HashConfig,
    ) -> CryptoResult<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &HashConfig {
        &self.config
    }

    pub fn sha256(&self, message: &[u8]) -> [u8; SHA256BYTES] {
        self.provider.hash_sha256(message)
    }

    pub fn sha512(&self, message: &[u8]) -> [u8; SHA512BYTES] {
        self.provider.hash_sha512(message)
    }

    /// Hashes the UTF-8 bytes of `message` with SHA-256 and encodes the digest.
    pub fn sha256_encoded(&self, message: &str, encoder: &dyn Encoder) -> String {
        encoder.encode(&self.sha256(message.as_bytes()))
    }

    /// Hashes the UTF-8 bytes of `message` with SHA-512 and encodes the digest.
    pub fn sha512_encoded(&self, message: &str, encoder: &dyn Encoder) -> String {
        encoder.encode(&self.sha512(message.as_bytes()))
    }

    /// Derives a [`SCRYPT_KEY_BYTES`]-byte key with scrypt (Salsa20/8, SHA-256).
    ///
    /// `salt` must be exactly [`SCRYPT_SALTBYTES`] long. `opslimit` and
    /// `memlimit` are passed through; the provider rejects values outside
    /// its bounds.
    pub fn scrypt_salsa208_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
    ) -> CryptoResult<Zeroizing<[u8; SCRYPT_KEY_BYTES]>> {
        check_length(salt, SCRYPT_SALTBYTES, "salt")?;
        let derived = Zeroizing::new(self.provider.kdf_scrypt(
            password,
            salt,
            opslimit,
            memlimit,
            SCRYPT_KEY_BYTES,
        )?);
        Ok(Zeroizing::new(fixed_output(&derived, "scrypt")?))
    }

    /// Password hash with scrypt, returned through `encoder`.
    pub fn pwhash_scryptsalsa208sha256(
        &self,
        password: &str,
        encoder: &dyn Encoder,
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
    ) -> CryptoResult<String> {
        let key = self.scrypt_salsa208_sha256(password.as_bytes(), salt, opslimit, memlimit)?;
        Ok(encoder.encode(&key[..]))
    }

    /// Derives a [`PBKDF2_SHA256_BYTES`]-byte key with PBKDF2-HMAC-SHA-256.
    ///
    /// Salts of any length are accepted.
    pub fn pbkdf2_sha256_raw(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> CryptoResult<Zeroizing<[u8; PBKDF2_SHA256_BYTES]>> {
        let derived = Zeroizing::new(self.provider.kdf_pbkdf2_sha256(
            password,
            salt,
            iterations,
            PBKDF2_SHA256_BYTES,
        )?);
        Ok(Zeroizing::new(fixed_output(&derived, "PBKDF2")?))
    }

    /// PBKDF2-HMAC-SHA-256 of the UTF-8 bytes of `password`, returned through
    /// `encoder`.
    pub fn pbkdf2_sha256(
        &self,
        password: &str,
        encoder: &dyn Encoder,
        salt: &[u8],
        iterations: u32,
    ) -> CryptoResult<String> {
        let key = self.pbkdf2_sha256_raw(password.as_bytes(), salt, iterations)?;
        Ok(encoder.encode(&key[..]))
    }

    /// [`pwhash_scryptsalsa208sha256`](Self::pwhash_scryptsalsa208sha256)
    /// with the configured limits.
    pub fn pwhash(
        &self,
        password: &str,
        encoder: &dyn Encoder,
        salt: &[u8],
    ) -> CryptoResult<String> {
        self.pwhash_scryptsalsa208sha256(
            password,
            encoder,
            salt,
            self.config.scrypt_opslimit,
            self.config.scrypt_memlimit,
        )
    }

    /// [`pbkdf2_sha256`](Self::pbkdf2_sha256) with the configured iteration count.
    pub fn pbkdf2(
        &self,
        password: &str,
        encoder: &dyn Encoder,
        salt: &[u8],
    ) -> CryptoResult<String> {
        self.pbkdf2_sha256(password, encoder, salt, self.config.pbkdf2_iterations)
    }
}

/// A provider that hands back the wrong number of bytes is broken; report it
/// instead of truncating or padding.
fn fixed_output<const N: usize>(derived: &[u8], kdf: &str) -> CryptoResult<[u8; N]> {
    derived.try_into().map_err(|_| {
        CryptoError::Provider(ProviderError::KeyDerivation(format!(
            "{kdf} returned {} bytes, expected {N}",
            derived.len()
        )))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SCRYPT_MEMLIMIT_MIN, SCRYPT_OPSLIMIT_MIN};
    use crate::encoder::HEX;
    use crate::provider::{default_provider, ProviderResult};
    use crate::{PUBLICKEY_BYTES, SECRETKEY_BYTES};

    /// Provider whose KDFs return one byte too few.
    struct ShortKdfProvider;

    impl PrimitiveProvider for ShortKdfProvider {
        fn hash_sha256(&self, _message: &[u8]) -> [u8; SHA256BYTES] {
            [0u8; SHA256BYTES]
        }

        fn hash_sha512(&self, _message: &[u8]) -> [u8; SHA512BYTES] {
            [0u8; SHA512BYTES]
        }

        fn kdf_scrypt(
            &self,
            _password: &[u8],
            _salt: &[u8],
            _opslimit: u64,
            _memlimit: usize,
            out_len: usize,
        ) -> ProviderResult<Vec<u8>> {
            Ok(vec![0u8; out_len - 1])
        }

        fn kdf_pbkdf2_sha256(
            &self,
            _password: &[u8],
            _salt: &[u8],
            _iterations: u32,
            out_len: usize,
        ) -> ProviderResult<Vec<u8>> {
            Ok(vec![0u8; out_len - 1])
        }

        fn keypair_generate(
            &self,
        ) -> ProviderResult<([u8; SECRETKEY_BYTES], [u8; PUBLICKEY_BYTES])> {
            Err(ProviderError::Unavailable("test provider".into()))
        }

        fn scalar_mult_base(
            &self,
            _secret: &[u8; SECRETKEY_BYTES],
        ) -> ProviderResult<[u8; PUBLICKEY_BYTES]> {
            Err(ProviderError::Unavailable("test provider".into()))
        }

        fn random_bytes(&self, len: usize) -> ProviderResult<Vec<u8>> {
            Ok(vec![0u8; len])
        }
    }

    #[test]
    fn short_provider_output_is_an_error() {
        let hash = Hash::new(Arc::new(ShortKdfProvider));

        let err = hash.pbkdf2_sha256_raw(b"pw", b"salt", 1).unwrap_err();
        assert!(err.to_string().contains("returned 31 bytes, expected 32"));

        let err = hash
            .scrypt_salsa208_sha256(b"pw", &[0u8; 32], SCRYPT_OPSLIMIT_MIN, SCRYPT_MEMLIMIT_MIN)
            .unwrap_err();
        assert!(err.to_string().contains("returned 63 bytes, expected 64"));
    }

    #[test]
    fn salt_checked_before_provider_runs() {
        // ShortKdfProvider would report a length error of its own; the salt
        // error must win.
        let hash = Hash::new(Arc::new(ShortKdfProvider));
        let err = hash
            .scrypt_salsa208_sha256(b"pw", &[0u8; 16], SCRYPT_OPSLIMIT_MIN, SCRYPT_MEMLIMIT_MIN)
            .unwrap_err();
        assert!(matches!(
            err,
            CryptoError::InvalidKeyLength {
                buffer: "salt",
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn with_config_rejects_invalid_config() {
        let config = HashConfig {
            pbkdf2_iterations: 0,
            ..HashConfig::default()
        };
        assert!(matches!(
            Hash::with_config(default_provider(), config),
            Err(CryptoError::Config(_))
        ));
    }

    #[test]
    fn encoded_digest_matches_raw_digest() {
        let hash = Hash::new(default_provider());
        let raw = hash.sha512(b"natrium");
        assert_eq!(hash.sha512_encoded("natrium", &HEX), hex::encode(raw));
    }
}
