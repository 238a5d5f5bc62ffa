//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! This module stretches a passphrase and salt into a fixed-length key. The
//! iteration count is a fixed system parameter: records carry no algorithm
//! metadata, so every Safeword build must derive keys identically.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::ZeroizeOnDrop;

use crate::record::SALT_LEN;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 100_000;

/// A cryptographic key derived from a passphrase.
///
/// Key material is zeroized from memory when dropped, reducing the window of
/// exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LEN],
}

impl DerivedKey {
    fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher
    /// operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive an encryption key from a passphrase and salt.
///
/// Same passphrase + salt always produces the same key, so a record sealed
/// today can be opened later from its stored salt. A different salt produces
/// a different key even for an identical passphrase.
///
/// The empty passphrase is accepted; rejecting weak passphrases is a front
/// end concern.
pub fn derive_key(passphrase: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    let mut key_bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ROUNDS, &mut key_bytes);
    DerivedKey::from_bytes(key_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT_A: [u8; SALT_LEN] = [0x11; SALT_LEN];
    const SALT_B: [u8; SALT_LEN] = [0x22; SALT_LEN];

    #[test]
    fn test_key_derivation_deterministic() {
        let key1 = derive_key("test-passphrase", &SALT_A);
        let key2 = derive_key("test-passphrase", &SALT_A);

        // Same passphrase + salt should produce identical keys
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("test-passphrase", &SALT_A);
        let key2 = derive_key("test-passphrase", &SALT_B);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_passphrase_different_key() {
        let key1 = derive_key("passphrase-one", &SALT_A);
        let key2 = derive_key("passphrase-two", &SALT_A);

        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_empty_passphrase_accepted() {
        let key = derive_key("", &SALT_A);
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn test_derived_key_debug_redacts() {
        let key = derive_key("test-passphrase", &SALT_A);

        let debug_output = format!("{:?}", key);
        assert!(debug_output.contains("REDACTED"));

        // Should NOT contain actual key bytes
        let key_hex = hex::encode(&key.as_bytes()[..4]);
        assert!(!debug_output.contains(&key_hex));
    }
}
