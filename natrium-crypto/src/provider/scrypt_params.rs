//! Translation of libsodium scrypt cost limits into scrypt parameters.
//!
//! libsodium's `crypto_pwhash_scryptsalsa208sha256` takes an operations
//! limit and a memory limit rather than raw `(N, r, p)`. The mapping below
//! follows libsodium's `pickparams`, so the same limits select the same
//! `(N, r, p)` that libsodium would use.

use super::{ProviderError, ProviderResult};
use crate::constants::{
    SCRYPT_MEMLIMIT_MAX, SCRYPT_MEMLIMIT_MIN, SCRYPT_OPSLIMIT_MAX, SCRYPT_OPSLIMIT_MIN,
};

/// Block size parameter; libsodium always uses 8.
pub const SCRYPT_R: u32 = 8;

const MAX_RP: u64 = 0x3fff_ffff;

/// Raw scrypt cost parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl ScryptParams {
    /// Picks `(log2 N, r, p)` for the given limits.
    ///
    /// Limits outside [`SCRYPT_OPSLIMIT_MIN`]..=[`SCRYPT_OPSLIMIT_MAX`] or
    /// [`SCRYPT_MEMLIMIT_MIN`]..=[`SCRYPT_MEMLIMIT_MAX`] are rejected rather
    /// than clamped.
    pub fn from_limits(opslimit: u64, memlimit: usize) -> ProviderResult<Self> {
        if opslimit < SCRYPT_OPSLIMIT_MIN {
            return Err(ProviderError::InvalidParams(format!(
                "scrypt opslimit {opslimit} below minimum {SCRYPT_OPSLIMIT_MIN}"
            )));
        }
        if memlimit < SCRYPT_MEMLIMIT_MIN {
            return Err(ProviderError::InvalidParams(format!(
                "scrypt memlimit {memlimit} below minimum {SCRYPT_MEMLIMIT_MIN}"
            )));
        }

        if opslimit > SCRYPT_OPSLIMIT_MAX {
            return Err(ProviderError::InvalidParams(format!(
                "scrypt opslimit {opslimit} above maximum {SCRYPT_OPSLIMIT_MAX}"
            )));
        }
        if memlimit > SCRYPT_MEMLIMIT_MAX {
            return Err(ProviderError::InvalidParams(format!(
                "scrypt memlimit {memlimit} above maximum {SCRYPT_MEMLIMIT_MAX}"
            )));
        }

        let r = SCRYPT_R;
        let memlimit = memlimit as u64;

        if opslimit < memlimit / 32 {
            let max_n = opslimit / (u64::from(r) * 4);
            Ok(Self {
                log_n: smallest_log_n(max_n),
                r,
                p: 1,
            })
        } else {
            let max_n = memlimit / (u64::from(r) * 128);
            let log_n = smallest_log_n(max_n);
            let max_rp = ((opslimit / 4) / (1u64 << log_n)).min(MAX_RP);
            Ok(Self {
                log_n,
                r,
                p: (max_rp as u32) / r,
            })
        }
    }

    /// `N = 2^log_n`.
    pub fn n(&self) -> u64 {
        1u64 << self.log_n
    }

    /// Bytes scrypt allocates for these parameters (`128 r N` for V plus
    /// `128 r p` for B), or `None` if that does not fit in an `isize`.
    pub fn memory_bytes(&self) -> Option<usize> {
        let block = 128u64.checked_mul(u64::from(self.r))?;
        let v = block.checked_mul(self.n())?;
        let b = block.checked_mul(u64::from(self.p))?;
        let total = v.checked_add(b)?;
        if total > isize::MAX as u64 {
            return None;
        }
        usize::try_from(total).ok()
    }
}

/// Smallest `n` in `1..63` with `2^n > max_n / 2`, capped at 63.
fn smallest_log_n(max_n: u64) -> u8 {
    let mut log_n = 1u8;
    while log_n < 63 {
        if (1u64 << log_n) > max_n / 2 {
            break;
        }
        log_n += 1;
    }
    log_n
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{
        SCRYPT_MEMLIMIT_INTERACTIVE, SCRYPT_MEMLIMIT_SENSITIVE, SCRYPT_OPSLIMIT_INTERACTIVE,
        SCRYPT_OPSLIMIT_SENSITIVE,
    };

    #[test]
    fn minimum_limits_are_cpu_bound() {
        let params = ScryptParams::from_limits(SCRYPT_OPSLIMIT_MIN, SCRYPT_MEMLIMIT_MIN).unwrap();
        // 32768 / 32 = 1024 -> smallest 2^n > 512 is 2^10
        assert_eq!(params, ScryptParams { log_n: 10, r: 8, p: 1 });
        assert_eq!(params.n(), 1024);
    }

    #[test]
    fn interactive_limits() {
        let params =
            ScryptParams::from_limits(SCRYPT_OPSLIMIT_INTERACTIVE, SCRYPT_MEMLIMIT_INTERACTIVE)
                .unwrap();
        // memory-bound branch: maxN = 16 MiB / 1024 = 16384 -> N = 2^14, p = 8 / 8
        assert_eq!(params, ScryptParams { log_n: 14, r: 8, p: 1 });
    }

    #[test]
    fn sensitive_limits() {
        let params =
            ScryptParams::from_limits(SCRYPT_OPSLIMIT_SENSITIVE, SCRYPT_MEMLIMIT_SENSITIVE)
                .unwrap();
        assert_eq!(params, ScryptParams { log_n: 20, r: 8, p: 1 });
    }

    #[test]
    fn high_opslimit_raises_parallelism() {
        let params =
            ScryptParams::from_limits(SCRYPT_OPSLIMIT_INTERACTIVE * 4, SCRYPT_MEMLIMIT_MIN)
                .unwrap();
        assert_eq!(params.log_n, 14);
        assert_eq!(params.p, 4);
    }

    #[test]
    fn opslimit_below_minimum_rejected() {
        let err =
            ScryptParams::from_limits(SCRYPT_OPSLIMIT_MIN - 1, SCRYPT_MEMLIMIT_MIN).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidParams(_)));
    }

    #[test]
    fn opslimit_above_maximum_rejected() {
        for opslimit in [SCRYPT_OPSLIMIT_MAX + 1, u64::MAX] {
            let err = ScryptParams::from_limits(opslimit, SCRYPT_MEMLIMIT_MIN).unwrap_err();
            assert!(err.to_string().contains("above maximum"));
        }
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn memlimit_above_maximum_rejected() {
        for memlimit in [SCRYPT_MEMLIMIT_MAX + 1, usize::MAX] {
            let err = ScryptParams::from_limits(SCRYPT_OPSLIMIT_MIN, memlimit).unwrap_err();
            assert!(matches!(err, ProviderError::InvalidParams(_)));
            assert!(err.to_string().contains("memlimit"));
        }
    }

    #[test]
    fn maximum_limits_accepted() {
        let params = ScryptParams::from_limits(SCRYPT_OPSLIMIT_MAX, SCRYPT_MEMLIMIT_MAX).unwrap();
        assert_eq!(params.r, 8);
        assert!(params.p >= 1);
    }

    #[test]
    fn memory_bytes_counts_v_and_b() {
        let params = ScryptParams { log_n: 10, r: 8, p: 1 };
        assert_eq!(params.memory_bytes(), Some(128 * 8 * 1024 + 128 * 8));
    }

    #[test]
    fn memory_bytes_overflow_is_none() {
        let params = ScryptParams { log_n: 62, r: 8, p: 1 };
        assert_eq!(params.memory_bytes(), None);
    }

    #[test]
    fn memlimit_below_minimum_rejected() {
        let err = ScryptParams::from_limits(SCRYPT_OPSLIMIT_MIN, 1024).unwrap_err();
        assert!(err.to_string().contains("memlimit"));
    }

    #[test]
    fn log_n_search_is_capped() {
        assert_eq!(smallest_log_n(0), 1);
        assert_eq!(smallest_log_n(u64::MAX), 63);
    }
}
