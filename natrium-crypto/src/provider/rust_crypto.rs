//! Default provider backed by the RustCrypto crates.

use super::scrypt_params::ScryptParams;
use super::{PrimitiveProvider, ProviderError, ProviderResult};
use crate::constants::{PUBLICKEY_BYTES, SECRETKEY_BYTES, SHA256BYTES, SHA512BYTES};
use crypto_box::SecretKey;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};
use tracing::{debug, warn};

/// [`PrimitiveProvider`] built on `sha2`, `scrypt`, `pbkdf2` and `crypto_box`,
/// drawing entropy from the operating system.
///
/// Stateless, so a single instance can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl PrimitiveProvider for RustCryptoProvider {
    fn hash_sha256(&self, message: &[u8]) -> [u8; SHA256BYTES] {
        Sha256::digest(message).into()
    }

    fn hash_sha512(&self, message: &[u8]) -> [u8; SHA512BYTES] {
        let mut out = [0u8; SHA512BYTES];
        out.copy_from_slice(&Sha512::digest(message));
        out
    }

    fn kdf_scrypt(
        &self,
        password: &[u8],
        salt: &[u8],
        opslimit: u64,
        memlimit: usize,
        out_len: usize,
    ) -> ProviderResult<Vec<u8>> {
        let picked = ScryptParams::from_limits(opslimit, memlimit).inspect_err(|e| {
            warn!("rejected scrypt limits: {e}");
        })?;
        debug!(
            "scrypt opslimit={opslimit} memlimit={memlimit} -> log_n={} r={} p={}",
            picked.log_n, picked.r, picked.p
        );

        if picked.memory_bytes().is_none() {
            warn!(
                "scrypt log_n={} r={} p={} exceeds addressable memory",
                picked.log_n, picked.r, picked.p
            );
            return Err(ProviderError::InvalidParams(format!(
                "scrypt memlimit {memlimit} needs more memory than the address space allows"
            )));
        }

        // The length argument only feeds PHC string output; raw output length is `out.len()`.
        let len = scrypt::Params::RECOMMENDED_LEN;
        let params = scrypt::Params::new(picked.log_n, picked.r, picked.p, len)
            .map_err(|e| ProviderError::InvalidParams(format!("scrypt: {e}")))?;

        let mut out = vec![0u8; out_len];
        scrypt::scrypt(password, salt, &params, &mut out)
            .map_err(|e| ProviderError::KeyDerivation(format!("scrypt: {e}")))?;
        Ok(out)
    }

    fn kdf_pbkdf2_sha256(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out_len: usize,
    ) -> ProviderResult<Vec<u8>> {
        if iterations == 0 {
            return Err(ProviderError::InvalidParams(
                "PBKDF2 iteration count must be at least 1".to_string(),
            ));
        }
        if out_len == 0 {
            return Err(ProviderError::InvalidParams(
                "PBKDF2 output length must be at least 1".to_string(),
            ));
        }

        let mut out = vec![0u8; out_len];
        pbkdf2::pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut out);
        Ok(out)
    }

    fn keypair_generate(&self) -> ProviderResult<([u8; SECRETKEY_BYTES], [u8; PUBLICKEY_BYTES])> {
        let mut seed = [0u8; SECRETKEY_BYTES];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|e| ProviderError::Unavailable(format!("OS entropy source: {e}")))?;

        // `SecretKey` zeroizes itself on drop, so only the returned copy survives.
        let secret = SecretKey::from(seed);
        let public = secret.public_key();
        Ok((secret.to_bytes(), *public.as_bytes()))
    }

    fn scalar_mult_base(
        &self,
        secret: &[u8; SECRETKEY_BYTES],
    ) -> ProviderResult<[u8; PUBLICKEY_BYTES]> {
        let secret = SecretKey::from(*secret);
        Ok(*secret.public_key().as_bytes())
    }

    fn random_bytes(&self, len: usize) -> ProviderResult<Vec<u8>> {
        let mut out = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut out)
            .map_err(|e| ProviderError::Unavailable(format!("OS entropy source: {e}")))?;
        Ok(out)
    }
}
