//! Buffer sizes and KDF bounds.
//!
//! These must match the primitive provider exactly. The values are the
//! libsodium definitions for `crypto_box_curve25519xsalsa20poly1305`,
//! `crypto_hash_sha256`/`sha512` and `crypto_pwhash_scryptsalsa208sha256`.

/// Size of a curve25519 secret scalar in bytes.
pub const SECRETKEY_BYTES: usize = 32;

/// Size of a curve25519 public point in bytes.
pub const PUBLICKEY_BYTES: usize = 32;

/// SHA-256 digest size in bytes.
pub const SHA256BYTES: usize = 32;

/// SHA-512 digest size in bytes.
pub const SHA512BYTES: usize = 64;

/// Salt size for scrypt password hashing.
pub const SCRYPT_SALTBYTES: usize = 32;

/// Length of the key derived by scrypt password hashing.
pub const SCRYPT_KEY_BYTES: usize = 64;

pub const SCRYPT_OPSLIMIT_MIN: u64 = 32_768;
pub const SCRYPT_MEMLIMIT_MIN: usize = 16_777_216;

pub const SCRYPT_OPSLIMIT_MAX: u64 = 4_294_967_295;
/// 64 GiB, or the whole address space on targets where that is smaller.
pub const SCRYPT_MEMLIMIT_MAX: usize = if (usize::MAX as u64) < 68_719_476_736u64 {
    usize::MAX
} else {
    68_719_476_736u64 as usize
};

pub const SCRYPT_OPSLIMIT_INTERACTIVE: u64 = 524_288;
pub const SCRYPT_MEMLIMIT_INTERACTIVE: usize = 16_777_216;

pub const SCRYPT_OPSLIMIT_SENSITIVE: u64 = 33_554_432;
pub const SCRYPT_MEMLIMIT_SENSITIVE: usize = 1_073_741_824;

/// PBKDF2-SHA-256 output length. Deliberately the public key size, so a
/// PBKDF2 output can stand in wherever a 32-byte key is expected.
pub const PBKDF2_SHA256_BYTES: usize = PUBLICKEY_BYTES;

/// Number of bytes [`Random::random_default`](crate::Random::random_default) returns.
pub const RANDOM_BYTES_DEFAULT: usize = 32;
