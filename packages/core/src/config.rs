//! Centralized configuration for Envelope Core
//!
//! All sizes and cryptographic parameters live here to avoid hardcoded
//! values scattered across the project.

use std::sync::OnceLock;

/// Global application configuration (singleton)
static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Config {
    /// RSA modulus size in bits. 2048 is the minimum acceptable today.
    /// Key generation and the wrap payload bound both derive from this
    /// one value.
    pub rsa_modulus_bits: usize,

    /// AES-256 key length (in bytes)
    pub key_length: usize,

    /// AES-CBC IV length (in bytes, equal to the AES block size)
    pub iv_length: usize,
}

impl Config {
    /// Configuration with default values
    pub fn default() -> Self {
        Self {
            rsa_modulus_bits: 2048,
            key_length: 32,
            iv_length: 16,
        }
    }

    /// Install a custom configuration. Returns `Err` with the rejected
    /// config if the global configuration was already initialized.
    pub fn init(config: Config) -> Result<(), Config> {
        GLOBAL_CONFIG.set(config)
    }

    /// Access the global configuration, initializing with defaults on
    /// first use.
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_sizes() {
        let config = Config::default();
        assert_eq!(config.rsa_modulus_bits, 2048);
        assert_eq!(config.key_length, 32);
        assert_eq!(config.iv_length, 16);
    }
}
