// Error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CryptoError {
    /// A supplied public or private key string could not be parsed.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Input exceeds what the RSA modulus and OAEP padding allow. Only the
    /// symmetric key and IV should ever reach the asymmetric layer, so this
    /// indicates a programming error under normal use.
    #[error("Payload too large for asymmetric encryption: {actual} bytes (maximum {max})")]
    PayloadTooLarge { max: usize, actual: usize },

    /// Integrity/padding check failed during decryption. Deliberately does
    /// not distinguish wrong key from corruption from tampering.
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Malformed base64 or malformed text encoding at a boundary conversion.
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// Key generation failed (entropy/allocation failure). Unrecoverable.
    #[error("Key generation failed: {0}")]
    KeyGenerationError(String),
}

pub type Result<T> = std::result::Result<T, CryptoError>;
