//! Text formatting for snapshots and corpus listings.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::types::{Item, Mode, OutputFormat, Snapshot};

/// Format a card snapshot for output.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_snapshot_human(snapshot),
        OutputFormat::Json => to_json(snapshot),
    }
}

/// Format a whole corpus, in the order given.
pub fn format_corpus(mode: Mode, items: &[Item], format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_corpus_human(mode, items),
        OutputFormat::Json => to_json(items),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_snapshot_human(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "[{}  {}/{}]\n",
        snapshot.mode, snapshot.shown, snapshot.total
    ));

    match &snapshot.text {
        Some(text) => {
            out.push_str(&format!("  {}\n", text));
            match &snapshot.pronunciation {
                Some(pron) => out.push_str(&format!("  Pronunciation: {}\n", pron)),
                None => out.push_str("  Pronunciation: (hidden)\n"),
            }
        }
        None => out.push_str(&format!("  No items available in {} mode.\n", snapshot.mode)),
    }

    out
}

fn format_corpus_human(mode: Mode, items: &[Item]) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ({} items) ===\n", mode, items.len()));

    // Vowel signs and the pulli take no column of their own
    let width = items.iter().map(|i| i.text.width()).max().unwrap_or(0);

    for item in items {
        let pad = width - item.text.width();
        out.push_str(&format!(
            "  {}{}  {}\n",
            item.text,
            " ".repeat(pad),
            item.pronunciation
        ));
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain strings, bools and counts: serialization cannot fail
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================
