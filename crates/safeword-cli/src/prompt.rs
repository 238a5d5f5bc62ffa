//! Interactive prompt helpers.
//!
//! All prompts are gated on a TTY; off-TTY callers must supply values via
//! flags, stdin, or the `SAFEWORD_PASSPHRASE` environment variable.

use std::io::{self, IsTerminal, Read};

use dialoguer::{theme::ColorfulTheme, Input, Password, Select};

/// Environment variable consulted before prompting for the passphrase.
pub const PASSPHRASE_ENV: &str = "SAFEWORD_PASSPHRASE";

/// Prompt for trimmed text input.
pub fn input(prompt: &str) -> anyhow::Result<String> {
    if !io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive input required for \"{}\". Use flags or run on a TTY.",
            prompt
        ));
    }

    let value = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Obtain the passphrase from the environment or a hidden prompt.
///
/// The passphrase is trimmed like every other input, so a value pasted with
/// stray whitespace derives the same key either way.
pub fn passphrase() -> anyhow::Result<String> {
    if let Ok(value) = std::env::var(PASSPHRASE_ENV) {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    if !io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive passphrase input required. Set {} or run on a TTY.",
            PASSPHRASE_ENV
        ));
    }

    let value = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Safeword")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))?;
    Ok(value.trim().to_string())
}

/// Prompt for selection from a list of options.
pub fn select(prompt: &str, options: &[&str]) -> anyhow::Result<usize> {
    if !io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "Interactive selection required. Use a subcommand or run on a TTY."
        ));
    }

    let result = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;
    Ok(result)
}

/// Read piped input from stdin, trimmed.
pub fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    let trimmed = buffer.trim().to_string();
    if trimmed.is_empty() {
        return Err(anyhow::anyhow!("No input provided on stdin"));
    }
    Ok(trimmed)
}
