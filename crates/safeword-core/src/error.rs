//! Error types for Safeword core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-friendly messages. `DecryptionFailed` is deliberately opaque: CBC
//! without a MAC cannot reliably tell a wrong passphrase apart from tampered
//! data, so the engine reports neither.

use thiserror::Error;

/// Result type alias for Safeword operations.
pub type Result<T> = std::result::Result<T, SafewordError>;

/// Core error type for Safeword operations.
#[derive(Debug, Error)]
pub enum SafewordError {
    /// The OS random source failed while generating salt/IV material
    #[error("random source failure: {0}")]
    RandomSource(String),

    /// A record field failed hex decoding or a length constraint
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Wrong passphrase, mismatched salt/IV, or tampered ciphertext
    #[error("decryption failed")]
    DecryptionFailed,

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
