use anyhow::{Context, Result, bail};
use inquire::{Password, PasswordDisplayMode, required};
use std::{io::IsTerminal, path::Path};

/// Ask the user for a weatherapi.com key; `key_path` is where it will be stored.
pub fn ask_api_key(key_path: &Path) -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!(
            "There is no API Key in {} and stdin is not a terminal.\n\
             Hint: write your api.weatherapi key to that file, or run `raincheck` interactively.",
            key_path.display()
        );
    }

    let message = format!(
        "There is no API Key in {}. Enter API Key for api.weatherapi:",
        key_path.display()
    );

    Password::new(&message)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_validator(required!("API key must not be empty"))
        .prompt()
        .context("Failed to read API key from terminal")
}
