// Envelope Core
// Hybrid RSA/AES envelope encryption engine

#![warn(clippy::all)]

pub mod config;
pub mod crypto;
pub mod error;
pub mod utils;

// Re-exports for convenience
pub use crypto::envelope::{decrypt, encrypt, generate_key_pair, Envelope};
pub use error::{CryptoError, Result};
