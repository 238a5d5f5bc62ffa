//! Cryptographic operations for Safeword.
//!
//! This module provides key derivation using well-audited RustCrypto
//! libraries:
//! - **PBKDF2-HMAC-SHA256**: password-based key stretching
//! - **zeroize**: key material wiped from memory on drop
//!
//! ## Security Model
//!
//! - A fresh 16-byte salt per encryption makes derivation unique even when a
//!   passphrase is reused
//! - 100,000 iterations make offline brute-force guessing expensive
//! - Derived keys live only for the duration of one seal/open call
//! - No plaintext passphrases stored
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the stored salt/iv/data record
//! - Offline brute-force attacks on the passphrase
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - Ciphertext tampering (CBC carries no authentication tag; tampering is
//!   only probabilistically detected via padding and UTF-8 validation)

pub mod key;

pub use key::{derive_key, DerivedKey, KEY_LEN, PBKDF2_ROUNDS};
