//! Rendering for the `--output` formats.
//!
//! Tables come from `tabled` row structs; `json`, `json-compact`, and
//! `yaml` serialize the wire types directly; `plain` prints one
//! identifier per line for scripting.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Whether to emit ANSI colors under the given mode.
pub fn use_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Serialize for the structured formats; `None` for table/plain.
///
/// The expect is safe: every rendered type is a plain data struct whose
/// serialization cannot fail.
pub(crate) fn structured<T: Serialize + ?Sized>(
    format: &OutputFormat,
    data: &T,
) -> Option<String> {
    match format {
        OutputFormat::Json => {
            Some(serde_json::to_string_pretty(data).expect("plain data serializes"))
        }
        OutputFormat::JsonCompact => {
            Some(serde_json::to_string(data).expect("plain data serializes"))
        }
        OutputFormat::Yaml => Some(serde_yaml::to_string(data).expect("plain data serializes")),
        OutputFormat::Table | OutputFormat::Plain => None,
    }
}

/// Render a collection in the chosen format. `to_row` builds the tabled
/// row for table output; `key_of` yields the identifier for plain output.
pub fn format_rows<T, R>(
    format: &OutputFormat,
    items: &[T],
    to_row: impl Fn(&T) -> R,
    key_of: impl Fn(&T) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
{
    if let Some(out) = structured(format, items) {
        return out;
    }
    match format {
        OutputFormat::Plain => items.iter().map(&key_of).collect::<Vec<_>>().join("\n"),
        _ => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
    }
}

/// Render one record in the chosen format. Table output goes through
/// `describe`, a hand-formatted multi-line detail view.
pub fn format_record<T: Serialize>(
    format: &OutputFormat,
    record: &T,
    describe: impl Fn(&T) -> String,
    key_of: impl Fn(&T) -> String,
) -> String {
    if let Some(out) = structured(format, record) {
        return out;
    }
    match format {
        OutputFormat::Plain => key_of(record),
        _ => describe(record),
    }
}

/// Write rendered output to stdout unless quiet.
pub fn emit(text: &str, quiet: bool) {
    if quiet || text.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{text}");
}
