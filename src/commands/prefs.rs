//! Preference commands for inspecting and editing the stored view settings.
//!
//! - `prefs show`: Display current preferences
//! - `prefs get`: Print one preference value
//! - `prefs set`: Set a preference value

use std::str::FromStr;

use owo_colors::OwoColorize;

use crate::error::Result;
use crate::prefs::{PrefKey, PrefStore};

/// Show current preferences
pub fn cmd_prefs_show(store: &PrefStore) -> Result<()> {
    let prefs = store.load();

    println!("{}\n", "Preferences:".cyan().bold());
    println!("  {}: {}", "group".cyan(), prefs.group);
    println!("  {}: {}", "sort".cyan(), prefs.sort);
    println!();
    println!(
        "{}: {}",
        "file".dimmed(),
        store.path().display().to_string().dimmed()
    );

    Ok(())
}

/// Print a single preference value
pub fn cmd_prefs_get(store: &PrefStore, key: &str) -> Result<()> {
    let key = PrefKey::from_str(key)?;
    println!("{}", store.get(key));
    Ok(())
}

/// Set a preference value, rejecting values the board cannot use
pub fn cmd_prefs_set(store: &PrefStore, key: &str, value: &str) -> Result<()> {
    let key = PrefKey::from_str(key)?;
    store.set(key, value)?;
    println!("{} {} = {}", "Set".green(), key, value);
    Ok(())
}
