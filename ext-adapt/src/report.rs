use colored::Colorize;
use manifest_core::{format_summary, format_text, DiffEntry};

use crate::transform::TransformNote;

/// Render diff entries for terminal output.
pub fn render_text(entries: &[DiffEntry]) -> String {
    let raw = format_text(entries);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with('+') {
            line.green().to_string()
        } else if line.starts_with('-') {
            line.red().to_string()
        } else if line.starts_with('~') {
            line.yellow().to_string()
        } else if line.starts_with('!') {
            line.magenta().to_string()
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

/// Render summary counts for terminal output.
pub fn render_summary(entries: &[DiffEntry]) -> String {
    format_summary(entries).cyan().to_string()
}

/// Render transformation notes, one per line.
pub fn render_notes(notes: &[TransformNote]) -> String {
    notes
        .iter()
        .map(|note| format!("{} {note}", "note:".bold()))
        .collect::<Vec<_>>()
        .join("\n")
}
