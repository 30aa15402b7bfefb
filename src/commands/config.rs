//! Config subcommands handler

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use subplay::{Config, ConfigSettingsStore, Settings, SettingsStore};

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str.trim_end());
    Ok(())
}

/// Print the configuration file location.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    // Ensure config exists
    if !config_path.exists() {
        Config::default().save_to(&config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor '{}'", editor))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Report mistakes right away rather than on the next run
    Config::load_from(&config_path)?;
    Ok(())
}

/// Reset the display settings to their defaults.
///
/// Only the `[display]` table is rewritten; playback settings and comments
/// elsewhere in the file are kept.
pub fn handle_reset(yes: bool) -> Result<()> {
    let store = ConfigSettingsStore::from_default_location()?;

    if !yes && !prompt_confirmation(&format!(
        "Reset display settings in {}?",
        store.path().display()
    ))? {
        println!("No changes made.");
        return Ok(());
    }

    store.save(&Settings::default());
    // The store only logs failures, so check the result by reading it back
    let config = Config::load_from(store.path())?;
    if config.display != Settings::default() {
        anyhow::bail!("Failed to write {}", store.path().display());
    }
    println!("Display settings reset.");
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
/// If stdin is not a TTY (non-interactive), returns false.
fn prompt_confirmation(message: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        println!("Non-interactive mode: use --yes to apply changes");
        return Ok(false);
    }

    print!("{} [y/N] ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
