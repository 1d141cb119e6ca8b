//! Password-hashing cost configuration.

use crate::constants::{
    SCRYPT_MEMLIMIT_INTERACTIVE, SCRYPT_MEMLIMIT_MAX, SCRYPT_MEMLIMIT_MIN,
    SCRYPT_MEMLIMIT_SENSITIVE, SCRYPT_OPSLIMIT_INTERACTIVE, SCRYPT_OPSLIMIT_MAX,
    SCRYPT_OPSLIMIT_MIN, SCRYPT_OPSLIMIT_SENSITIVE,
};
use crate::error::{CryptoError, CryptoResult};
use serde::{Deserialize, Serialize};

/// Costs used by [`Hash::pwhash`](crate::Hash::pwhash) and
/// [`Hash::pbkdf2`](crate::Hash::pbkdf2).
///
/// The explicit-parameter methods on [`Hash`](crate::Hash) ignore this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// scrypt operations limit.
    pub scrypt_opslimit: u64,

    /// scrypt memory limit in bytes.
    pub scrypt_memlimit: usize,

    /// PBKDF2-HMAC-SHA-256 iteration count.
    pub pbkdf2_iterations: u32,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

impl HashConfig {
    /// Costs suitable for interactive logins.
    pub fn interactive() -> Self {
        Self {
            scrypt_opslimit: SCRYPT_OPSLIMIT_INTERACTIVE,
            scrypt_memlimit: SCRYPT_MEMLIMIT_INTERACTIVE,
            pbkdf2_iterations: 100_000,
        }
    }

    /// Costs for long-lived, high-value secrets. scrypt needs 1 GiB here.
    pub fn sensitive() -> Self {
        Self {
            scrypt_opslimit: SCRYPT_OPSLIMIT_SENSITIVE,
            scrypt_memlimit: SCRYPT_MEMLIMIT_SENSITIVE,
            pbkdf2_iterations: 600_000,
        }
    }

    /// Rejects costs the provider would refuse anyway.
    pub fn validate(&self) -> CryptoResult<()> {
        if self.scrypt_opslimit < SCRYPT_OPSLIMIT_MIN {
            return Err(CryptoError::Config(format!(
                "scrypt_opslimit {} below minimum {SCRYPT_OPSLIMIT_MIN}",
                self.scrypt_opslimit
            )));
        }
        if self.scrypt_memlimit < SCRYPT_MEMLIMIT_MIN {
            return Err(CryptoError::Config(format!(
                "scrypt_memlimit {} below minimum {SCRYPT_MEMLIMIT_MIN}",
                self.scrypt_memlimit
            )));
        }
        if self.scrypt_opslimit > SCRYPT_OPSLIMIT_MAX {
            return Err(CryptoError::Config(format!(
                "scrypt_opslimit {} above maximum {SCRYPT_OPSLIMIT_MAX}",
                self.scrypt_opslimit
            )));
        }
        if self.scrypt_memlimit > SCRYPT_MEMLIMIT_MAX {
            return Err(CryptoError::Config(format!(
                "scrypt_memlimit {} above maximum {SCRYPT_MEMLIMIT_MAX}",
                self.scrypt_memlimit
            )));
        }
        if self.pbkdf2_iterations == 0 {
            return Err(CryptoError::Config(
                "pbkdf2_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
