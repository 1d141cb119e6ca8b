//! Text encodings for keys and digests.

use crate::error::{CryptoError, CryptoResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Bidirectional mapping between raw bytes and a caller-facing string.
pub trait Encoder: Send + Sync {
    fn encode(&self, bytes: &[u8]) -> String;

    fn decode(&self, text: &str) -> CryptoResult<Vec<u8>>;
}

/// Lowercase hexadecimal. Decoding accepts either case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hex;

/// Standard base64 alphabet with padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Base64;

pub const HEX: Hex = Hex;
pub const BASE64: Base64 = Base64;

impl Encoder for Hex {
    fn encode(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn decode(&self, text: &str) -> CryptoResult<Vec<u8>> {
        hex::decode(text).map_err(|e| CryptoError::Encoding(format!("invalid hex: {e}")))
    }
}

impl Encoder for Base64 {
    fn encode(&self, bytes: &[u8]) -> String {
        STANDARD.encode(bytes)
    }

    fn decode(&self, text: &str) -> CryptoResult<Vec<u8>> {
        STANDARD
            .decode(text)
            .map_err(|e| CryptoError::Encoding(format!("invalid base64: {e}")))
    }
}
