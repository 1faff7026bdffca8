//! Hybrid protocol coordinator
//!
//! Symmetric ciphers are fast but need a shared secret; asymmetric ciphers
//! solve key distribution but are slow and size-bounded. The coordinator
//! combines them: a fresh AES key and IV encrypt the payload, the
//! recipient's RSA public key wraps just that key material, and everything
//! crosses the API boundary as base64.
//!
//! Stateless, two entry points. Adapter errors propagate unchanged; nothing
//! is retried or reinterpreted here.

use crate::crypto::{asymmetric, symmetric};
use crate::error::Result;
use crate::utils::b64;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

/// The output bundle of one encryption operation.
///
/// All three fields must travel together as an atomic unit; losing any one
/// of them makes the message unrecoverable. The struct is serde-friendly so
/// callers can move it through JSON or any other text channel intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// base64 of the AES-CBC payload ciphertext
    pub ciphertext: String,
    /// base64 of the RSA-wrapped AES key
    pub wrapped_key: String,
    /// base64 of the RSA-wrapped IV
    pub wrapped_iv: String,
}

/// Generate a fresh RSA key pair, returned as `(public_pem, private_pem)`.
pub fn generate_key_pair() -> Result<(String, String)> {
    let pair = asymmetric::generate_key_pair()?;
    Ok((pair.public_key, pair.private_key))
}

/// Encrypt `plaintext` for the holder of `public_key_pem`.
///
/// The one-time key material lives only inside this call; the caller sees
/// nothing but its wrapped form. Every invocation draws fresh randomness,
/// so encrypting the same text twice never yields the same envelope.
pub fn encrypt(plaintext: &str, public_key_pem: &str) -> Result<Envelope> {
    let material = symmetric::SymmetricKeyMaterial::generate();

    let ciphertext = symmetric::encrypt(plaintext, &*material.key, &*material.iv)?;
    let wrapped_key = asymmetric::encrypt(&*material.key, public_key_pem)?;
    let wrapped_iv = asymmetric::encrypt(&*material.iv, public_key_pem)?;

    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "envelope sealed"
    );

    Ok(Envelope {
        ciphertext: b64::encode(&ciphertext),
        wrapped_key: b64::encode(&wrapped_key),
        wrapped_iv: b64::encode(&wrapped_iv),
    })
}

/// Recover the plaintext from an envelope using the matching private key.
///
/// Any bit corruption in any of the three fields surfaces as an error from
/// the corresponding layer rather than silently wrong plaintext (with the
/// CBC caveat documented in [`crate::crypto::symmetric`]).
pub fn decrypt(envelope: &Envelope, private_key_pem: &str) -> Result<String> {
    let ciphertext = b64::decode(&envelope.ciphertext)?;
    let wrapped_key = b64::decode(&envelope.wrapped_key)?;
    let wrapped_iv = b64::decode(&envelope.wrapped_iv)?;

    let key = Zeroizing::new(asymmetric::decrypt(&wrapped_key, private_key_pem)?);
    let iv = Zeroizing::new(asymmetric::decrypt(&wrapped_iv, private_key_pem)?);

    let plaintext = symmetric::decrypt(&ciphertext, &key, &iv)?;

    debug!(ciphertext_len = ciphertext.len(), "envelope opened");

    Ok(plaintext)
}
