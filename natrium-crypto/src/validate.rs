//! Length checks applied to every externally supplied buffer.
//!
//! Native fixed-size routines read exactly N bytes, so an undersized key or
//! salt must be rejected here, before it reaches the provider.

use crate::error::{CryptoError, CryptoResult};

/// Fails with [`CryptoError::InvalidKeyLength`] unless `buffer` is exactly
/// `expected` bytes long. `name` identifies the buffer in the error.
pub fn check_length(buffer: &[u8], expected: usize, name: &'static str) -> CryptoResult<()> {
    if buffer.len() != expected {
        return Err(CryptoError::InvalidKeyLength {
            buffer: name,
            expected,
            actual: buffer.len(),
        });
    }
    Ok(())
}

/// Checks the length of `buffer` and copies it into a fixed-size array.
pub fn to_array<const N: usize>(buffer: &[u8], name: &'static str) -> CryptoResult<[u8; N]> {
    check_length(buffer, N, name)?;
    let mut out = [0u8; N];
    out.copy_from_slice(buffer);
    Ok(out)
}
