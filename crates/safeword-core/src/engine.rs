//! The seal/open operation pair.
//!
//! `seal` turns a plaintext secret and a passphrase into an
//! [`EncryptedRecord`]; `open` reverses it given the same passphrase. Both
//! are stateless: all inputs are passed in or freshly generated, and nothing
//! outlives the call.
//!
//! The cipher is AES-256-CBC with PKCS#7 padding. There is no authentication
//! tag; a wrong passphrase or tampered ciphertext is detected via padding or
//! UTF-8 validation and reported as the single generic
//! [`SafewordError::DecryptionFailed`].

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::derive_key;
use crate::error::{Result, SafewordError};
use crate::record::{EncryptedRecord, IV_LEN, SALT_LEN};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Encrypt a secret with a passphrase-derived key.
///
/// Generates a fresh random salt and IV for every call, so sealing the same
/// secret twice yields two different records. The plaintext may be empty;
/// an empty passphrase is accepted but not recommended.
///
/// # Errors
///
/// Returns [`SafewordError::RandomSource`] if the OS random source fails.
/// Weak randomness is never silently substituted.
pub fn seal(plaintext: &str, passphrase: &str) -> Result<EncryptedRecord> {
    let mut salt = [0u8; SALT_LEN];
    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| SafewordError::RandomSource(e.to_string()))?;
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| SafewordError::RandomSource(e.to_string()))?;

    let key = derive_key(passphrase, &salt);
    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(EncryptedRecord::from_raw(&salt, &iv, &ciphertext))
}

/// Decrypt a record with the passphrase used to seal it.
///
/// Record fields are decoded and length-checked before any cipher work, so a
/// malformed record is reported as [`SafewordError::MalformedRecord`] without
/// touching the key derivation.
///
/// # Errors
///
/// Returns [`SafewordError::DecryptionFailed`] for a wrong passphrase,
/// mismatched salt/IV pairing, or tampered ciphertext. These are deliberately
/// not distinguished, and no partial plaintext is ever returned.
pub fn open(record: &EncryptedRecord, passphrase: &str) -> Result<String> {
    let salt = record.salt_bytes()?;
    let iv = record.iv_bytes()?;
    let ciphertext = record.ciphertext()?;

    let key = derive_key(passphrase, &salt);
    let plaintext = Aes256CbcDec::new(key.as_bytes().into(), (&iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| SafewordError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| SafewordError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::BLOCK_LEN;

    #[test]
    fn test_seal_open_round_trip() {
        let record = seal("wallet words go here", "test-passphrase").unwrap();
        let recovered = open(&record, "test-passphrase").unwrap();
        assert_eq!(recovered, "wallet words go here");
    }

    #[test]
    fn test_empty_plaintext_round_trip() {
        let record = seal("", "test-passphrase").unwrap();
        // Padding always emits at least one full block
        assert_eq!(record.ciphertext().unwrap().len(), BLOCK_LEN);
        assert_eq!(open(&record, "test-passphrase").unwrap(), "");
    }

    #[test]
    fn test_multibyte_utf8_round_trip() {
        let secret = "sn\u{00f6}flinga \u{79d8}\u{5bc6} \u{1f5dd}";
        let record = seal(secret, "test-passphrase").unwrap();
        assert_eq!(open(&record, "test-passphrase").unwrap(), secret);
    }

    #[test]
    fn test_fresh_salt_and_iv_every_seal() {
        let record1 = seal("same secret", "same-passphrase").unwrap();
        let record2 = seal("same secret", "same-passphrase").unwrap();

        assert_ne!(record1.salt, record2.salt);
        assert_ne!(record1.iv, record2.iv);
        assert_ne!(record1.data, record2.data);
    }

    #[test]
    fn test_wrong_passphrase_fails() {
        let record = seal("secret data", "correct-passphrase").unwrap();
        let result = open(&record, "wrong-passphrase");
        assert!(matches!(result, Err(SafewordError::DecryptionFailed)));
    }

    #[test]
    fn test_swapped_iv_fails_or_garbles_first_block_only() {
        // CBC: a wrong IV garbles only the first plaintext block, so with a
        // multi-block secret the padding still validates and detection rests
        // on UTF-8 validation. On the rare valid decode the output must at
        // least differ from the original secret.
        let secret = "\u{10348}\u{10349}\u{1034A}\u{1034B} trailing blocks of ascii text";
        let record = seal(secret, "test-passphrase").unwrap();

        let mut swapped = record.clone();
        swapped.iv = hex::encode([0u8; IV_LEN]);

        match open(&swapped, "test-passphrase") {
            Err(SafewordError::DecryptionFailed) => {}
            Ok(recovered) => assert_ne!(recovered, secret),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_ciphertext_fails_decryption() {
        let record = seal("secret", "test-passphrase").unwrap();
        let mut empty = record.clone();
        empty.data = String::new();
        // Zero bytes is block-aligned, so it passes record validation and
        // fails at unpadding
        assert!(matches!(
            open(&empty, "test-passphrase"),
            Err(SafewordError::DecryptionFailed)
        ));
    }
}
