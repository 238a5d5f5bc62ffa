//! Safeword CLI - Encrypt and decrypt a short secret with a passphrase
//!
//! This is the command-line interface for Safeword. It collects the secret,
//! the passphrase, and record fields, and hands them to the core library.

mod cli;
mod commands;
mod prompt;

use std::io::{self, IsTerminal};

use clap::Parser;
use safeword_core::VERSION;

use crate::cli::{Cli, Commands, DecryptArgs, EncryptArgs};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Encrypt(args)) => commands::encrypt::run(&args, cli.quiet),
        Some(Commands::Decrypt(args)) => commands::decrypt::run(&args, cli.quiet),
        None => run_interactive(cli.quiet),
    }
}

/// With no subcommand on a TTY, ask which way to go; otherwise print usage.
fn run_interactive(quiet: bool) -> anyhow::Result<()> {
    if io::stdin().is_terminal() {
        let choice = prompt::select(
            "What would you like to do?",
            &["Encrypt a secret", "Decrypt a record"],
        )?;
        match choice {
            0 => commands::encrypt::run(&EncryptArgs::default(), quiet),
            _ => commands::decrypt::run(&DecryptArgs::default(), quiet),
        }
    } else {
        println!("Safeword v{}", VERSION);
        println!("\nRun `safeword --help` for usage information.");
        Ok(())
    }
}
