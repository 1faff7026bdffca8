// Base64 utilities
//
// Every crossing between binary cryptographic output and the string-based
// public API goes through these two functions.

use crate::error::{CryptoError, Result};
use base64::{engine::general_purpose, Engine};

pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode(data: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(data)
        .map_err(|e| CryptoError::EncodingError(format!("Base64 decode failed: {}", e)))
}
