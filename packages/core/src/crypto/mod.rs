//! Cryptographic module
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                        Caller                           │
//! │  supplies plaintext strings and PEM keys, receives      │
//! │  back printable (base64/PEM) strings                    │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │              envelope (Hybrid Coordinator)              │
//! │  - fresh AES key + IV per message                       │
//! │  - AES-CBC encrypts the payload                         │
//! │  - RSA-OAEP wraps the key material                      │
//! └─────────────────────────────────────────────────────────┘
//!                            │
//!              ┌─────────────┴─────────────┐
//!              ▼                           ▼
//! ┌───────────────────────┐   ┌───────────────────────────┐
//! │      asymmetric       │   │        symmetric          │
//! │  RSA-2048 + OAEP      │   │  AES-256-CBC + PKCS#7     │
//! │  PEM key (de)serial.  │   │  key/IV generation        │
//! └───────────────────────┘   └───────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`asymmetric`]: RSA adapter — key pair generation, OAEP wrap/unwrap,
//!   PEM serialization (small payloads only, bounded by the modulus)
//! - [`symmetric`]: AES adapter — per-message key material, bulk
//!   encryption of arbitrary-length text
//! - [`envelope`]: the hybrid protocol connecting the two, and the
//!   [`envelope::Envelope`] transport type

pub mod asymmetric;
pub mod envelope;
pub mod symmetric;

pub use envelope::Envelope;
