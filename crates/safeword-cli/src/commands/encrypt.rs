//! The `encrypt` command: secret + passphrase in, JSON record out.

use std::io::{self, IsTerminal};

use safeword_core::seal;

use crate::cli::EncryptArgs;
use crate::prompt;

pub fn run(args: &EncryptArgs, quiet: bool) -> anyhow::Result<()> {
    let secret = read_secret(args)?;
    let passphrase = prompt::passphrase()?;

    let record = seal(&secret, &passphrase)?;

    if !quiet {
        println!("Encrypted secret (store this JSON safely):");
    }
    println!("{}", record.to_json_pretty()?);
    Ok(())
}

fn read_secret(args: &EncryptArgs) -> anyhow::Result<String> {
    if let Some(value) = &args.secret {
        return Ok(value.trim().to_string());
    }

    // Piped input wins over prompting when stdin is not a TTY
    if !io::stdin().is_terminal() {
        return prompt::read_stdin();
    }

    prompt::input("Secret to encrypt")
}
