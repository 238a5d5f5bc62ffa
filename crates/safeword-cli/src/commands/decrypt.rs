//! The `decrypt` command: record fields + passphrase in, secret out.

use safeword_core::{open, EncryptedRecord, SafewordError};

use crate::cli::DecryptArgs;
use crate::prompt;

pub fn run(args: &DecryptArgs, quiet: bool) -> anyhow::Result<()> {
    // The record fields are collected in the same order they are printed by
    // `encrypt`, so a stored record can be pasted back field by field.
    let salt = field(args.salt.as_deref(), "Salt value")?;
    let iv = field(args.iv.as_deref(), "IV value")?;
    let data = field(args.data.as_deref(), "Encrypted data value")?;
    let record = EncryptedRecord::new(salt, iv, data);

    let passphrase = prompt::passphrase()?;

    match open(&record, &passphrase) {
        Ok(secret) => {
            if !quiet {
                println!("Decrypted secret:");
            }
            println!("{}", secret);
            Ok(())
        }
        Err(err @ (SafewordError::DecryptionFailed | SafewordError::MalformedRecord(_))) => {
            eprintln!(
                "Failed to decrypt. The safeword may be incorrect or the data may have been altered."
            );
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

fn field(flag: Option<&str>, prompt_text: &str) -> anyhow::Result<String> {
    match flag {
        Some(value) => Ok(value.trim().to_string()),
        None => prompt::input(prompt_text),
    }
}
