//! The encrypted record wire format.
//!
//! A record is the only artifact meant for storage or transmission: the salt,
//! IV, and ciphertext of one `seal` call, each lowercase hex. It carries no
//! passphrase, key, or algorithm identifier - the algorithm is a fixed system
//! parameter agreed out of band.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SafewordError};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// IV length in bytes (AES block size).
pub const IV_LEN: usize = 16;

/// Cipher block size in bytes; ciphertext length must be a multiple of this.
pub const BLOCK_LEN: usize = 16;

/// An encrypted secret plus everything needed to decrypt it later, given the
/// correct passphrase.
///
/// Serializes to a JSON object with exactly three hex string fields:
/// `salt` (32 hex chars), `iv` (32 hex chars), and `data` (even-length hex,
/// byte length a multiple of the block size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptedRecord {
    /// Key derivation salt, hex-encoded
    pub salt: String,

    /// Cipher initialization vector, hex-encoded
    pub iv: String,

    /// Ciphertext, hex-encoded
    pub data: String,
}

impl EncryptedRecord {
    /// Assemble a record from user-supplied hex strings.
    ///
    /// Fields are stored as given (trimmed); they are validated lazily by the
    /// byte accessors, so a malformed field is reported when decryption is
    /// attempted, not here.
    pub fn new(
        salt: impl Into<String>,
        iv: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        let (salt, iv, data): (String, String, String) = (salt.into(), iv.into(), data.into());
        Self {
            salt: salt.trim().to_string(),
            iv: iv.trim().to_string(),
            data: data.trim().to_string(),
        }
    }

    /// Build a record from raw bytes produced by the engine.
    pub(crate) fn from_raw(salt: &[u8], iv: &[u8], ciphertext: &[u8]) -> Self {
        Self {
            salt: hex::encode(salt),
            iv: hex::encode(iv),
            data: hex::encode(ciphertext),
        }
    }

    /// Decode the salt field, enforcing the 16-byte length.
    pub fn salt_bytes(&self) -> Result<[u8; SALT_LEN]> {
        fixed_field(&self.salt, "salt")
    }

    /// Decode the IV field, enforcing the 16-byte length.
    pub fn iv_bytes(&self) -> Result<[u8; IV_LEN]> {
        fixed_field(&self.iv, "iv")
    }

    /// Decode the ciphertext field, enforcing block alignment.
    pub fn ciphertext(&self) -> Result<Vec<u8>> {
        let bytes = hex::decode(&self.data)
            .map_err(|_| SafewordError::MalformedRecord("data is not valid hex".to_string()))?;
        if bytes.len() % BLOCK_LEN != 0 {
            return Err(SafewordError::MalformedRecord(format!(
                "data length must be a multiple of {} bytes (got {})",
                BLOCK_LEN,
                bytes.len()
            )));
        }
        Ok(bytes)
    }

    /// Render the record as pretty-printed JSON for display and storage.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record from its JSON form.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

fn fixed_field<const N: usize>(value: &str, name: &str) -> Result<[u8; N]> {
    let bytes = hex::decode(value)
        .map_err(|_| SafewordError::MalformedRecord(format!("{} is not valid hex", name)))?;
    bytes.try_into().map_err(|_| {
        SafewordError::MalformedRecord(format!("{} must be {} hex characters", name, N * 2))
    })
}
