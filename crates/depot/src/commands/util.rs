//! Shared helpers for command handlers.

use crate::error::CliError;

/// Ask before a destructive operation. `--yes` short-circuits to true.
pub fn confirm(prompt: &str, assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))
}

/// Zone-less backend timestamp, shortened for table cells.
pub fn fmt_timestamp(ts: chrono::NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}
