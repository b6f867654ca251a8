//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Print a labeled value as compact or pretty-printed JSON.
pub fn labeled_json<T: Serialize>(label: &str, value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}: {}", label.bold(), json);
    Ok(())
}
