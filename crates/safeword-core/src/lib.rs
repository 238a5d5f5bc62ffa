//! # Safeword Core
//!
//! Core library for Safeword - a single-shot, passphrase-based secret
//! encryption tool for short text secrets such as wallet recovery words.
//!
//! This crate provides the cipher engine independent of the CLI interface:
//! it derives a key from a passphrase, encrypts or decrypts a secret, and
//! packages the result as a hex-encoded record.
//!
//! ## Architecture
//!
//! - **engine**: the `seal`/`open` operation pair
//! - **record**: the salt/iv/data wire format and its validation
//! - **crypto**: key derivation from passphrase and salt
//! - **error**: error taxonomy shared by all operations
//!
//! Every call is stateless and synchronous. Nothing here performs I/O beyond
//! drawing entropy from the operating system's random source.

pub mod crypto;
pub mod engine;
pub mod error;
pub mod record;

pub use crypto::{derive_key, DerivedKey};
pub use engine::{open, seal};
pub use error::{Result, SafewordError};
pub use record::EncryptedRecord;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
