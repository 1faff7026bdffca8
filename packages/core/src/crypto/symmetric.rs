//! AES adapter
//!
//! Per-message key material generation and AES-256-CBC encryption with
//! PKCS#7 padding. CBC with a fresh random IV gives semantic security for
//! arbitrary-length text; it carries no authentication tag, so payload
//! tamper detection rests on the padding check and is probabilistic (the
//! wrapped key and IV are integrity-protected by OAEP instead).

use crate::error::{CryptoError, Result};
use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

// Compile-time constants for array sizes (must match Config::default())
pub const KEY_LENGTH: usize = 32;
pub const IV_LENGTH: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// One-time symmetric key material, zeroized on drop.
///
/// Generated immediately before use, never persisted, never reused across
/// messages. Only its RSA-wrapped form ever leaves the encrypt call.
pub struct SymmetricKeyMaterial {
    pub key: Zeroizing<[u8; KEY_LENGTH]>,
    pub iv: Zeroizing<[u8; IV_LENGTH]>,
}

impl SymmetricKeyMaterial {
    /// Generate a fresh 256-bit key and a random block-size IV.
    pub fn generate() -> Self {
        let mut key = Zeroizing::new([0u8; KEY_LENGTH]);
        let mut iv = Zeroizing::new([0u8; IV_LENGTH]);
        OsRng.fill_bytes(&mut *key);
        OsRng.fill_bytes(&mut *iv);
        Self { key, iv }
    }
}

/// Encrypt UTF-8 text under the given key/IV.
///
/// Output length is a multiple of the block size; an empty string still
/// produces one full padding block.
pub fn encrypt(plaintext: &str, key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| {
        CryptoError::DecryptionFailed(format!(
            "invalid key/iv length: key {} bytes, iv {} bytes",
            key.len(),
            iv.len()
        ))
    })?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes()))
}

/// Decrypt ciphertext back to UTF-8 text.
///
/// A failed padding check means a wrong key/IV, corruption or tampering;
/// the causes are deliberately not distinguished.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<String> {
    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| {
        CryptoError::DecryptionFailed(format!(
            "invalid key/iv length: key {} bytes, iv {} bytes",
            key.len(),
            iv.len()
        ))
    })?;

    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed("padding check failed".to_string()))?;

    String::from_utf8(plaintext)
        .map_err(|e| CryptoError::EncodingError(format!("decrypted bytes are not valid UTF-8: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_key_material_sizes() {
        let material = SymmetricKeyMaterial::generate();
        assert_eq!(material.key.len(), 32);
        assert_eq!(material.iv.len(), 16);
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let material = SymmetricKeyMaterial::generate();
        let plaintext = "Secret message for the symmetric layer";

        let ciphertext = encrypt(plaintext, &*material.key, &*material.iv).unwrap();
        assert_eq!(ciphertext.len() % 16, 0, "output must be block-aligned");
        assert!(ciphertext.len() > plaintext.len());

        let decrypted = decrypt(&ciphertext, &*material.key, &*material.iv).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn test_empty_string_roundtrip() {
        let material = SymmetricKeyMaterial::generate();

        let ciphertext = encrypt("", &*material.key, &*material.iv).unwrap();
        assert_eq!(ciphertext.len(), 16, "empty input pads to one block");

        assert_eq!(decrypt(&ciphertext, &*material.key, &*material.iv).unwrap(), "");
    }

    #[test]
    fn test_decrypt_fails_with_wrong_key() {
        let material = SymmetricKeyMaterial::generate();
        let other = SymmetricKeyMaterial::generate();

        let ciphertext = encrypt("Secret message", &*material.key, &*material.iv).unwrap();

        let result = decrypt(&ciphertext, &*other.key, &*material.iv);
        // Padding failure in the overwhelming majority of cases; a garbled
        // block that happens to unpad still fails UTF-8 validation or
        // differs from the input.
        match result {
            Err(CryptoError::DecryptionFailed(_)) | Err(CryptoError::EncodingError(_)) => {}
            Ok(text) => assert_ne!(text, "Secret message"),
            Err(e) => panic!("unexpected error kind: {e}"),
        }
    }

    #[test]
    fn test_wrong_sized_key_is_rejected() {
        let material = SymmetricKeyMaterial::generate();
        let short_key = [0u8; 16];

        let result = encrypt("text", &short_key, &*material.iv);
        assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));

        let result = decrypt(&[0u8; 16], &short_key, &*material.iv);
        assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));
    }

    #[test]
    fn test_truncated_ciphertext_fails() {
        let material = SymmetricKeyMaterial::generate();
        let ciphertext = encrypt("A message spanning multiple blocks here", &*material.key, &*material.iv).unwrap();

        // Drop the final (padding) block
        let truncated = &ciphertext[..ciphertext.len() - 16];
        let result = decrypt(truncated, &*material.key, &*material.iv);
        match result {
            Err(_) => {}
            Ok(text) => assert_ne!(text, "A message spanning multiple blocks here"),
        }
    }

    #[test]
    fn test_key_material_is_fresh_per_call() {
        let a = SymmetricKeyMaterial::generate();
        let b = SymmetricKeyMaterial::generate();
        assert_ne!(*a.key, *b.key);
        assert_ne!(*a.iv, *b.iv);
    }
}
