use clap::{Args, Parser, Subcommand};

use safeword_core::VERSION;

/// Safeword - Encrypt and decrypt a short secret with a passphrase
#[derive(Parser)]
#[command(name = "safeword")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args, Default)]
pub struct EncryptArgs {
    /// Secret text to encrypt (prompted for when omitted)
    #[arg(long, value_name = "TEXT")]
    pub secret: Option<String>,
}

/// Arguments for the `decrypt` command
#[derive(Args, Default)]
pub struct DecryptArgs {
    /// Salt value from the encrypted record (hex)
    #[arg(long, value_name = "HEX")]
    pub salt: Option<String>,

    /// IV value from the encrypted record (hex)
    #[arg(long, value_name = "HEX")]
    pub iv: Option<String>,

    /// Encrypted data value from the record (hex)
    #[arg(long, value_name = "HEX")]
    pub data: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a secret into a salt/iv/data record
    Encrypt(EncryptArgs),

    /// Decrypt a previously encrypted record
    Decrypt(DecryptArgs),
}
