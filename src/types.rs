//! Domain types for tamil-drill.
//!
//! Plain data shared by the deck, the formatters, and both front-ends.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ============================================================================
// PRIMITIVES
// ============================================================================

/// One flashcard: a Tamil glyph or word and its romanization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// What the learner sees.
    pub text: String,
    /// What gets revealed.
    pub pronunciation: String,
}

impl Item {
    pub fn new(text: impl Into<String>, pronunciation: impl Into<String>) -> Self {
        Item {
            text: text.into(),
            pronunciation: pronunciation.into(),
        }
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// Which corpus a deck draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Single glyphs: vowels, consonants, ligatures.
    #[default]
    Characters,
    /// Whole words.
    Words,
}

impl Mode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Characters => Mode::Words,
            Mode::Words => Mode::Characters,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Characters => "Characters",
            Mode::Words => "Words",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Observable deck phase.
///
/// There is no "uninitialized" variant: a session only exists after
/// its first initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An item is displayed.
    Ready { revealed: bool },
    /// The active corpus has no items. Only a mode switch leaves this.
    Empty,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// Read-only view handed to renderers.
///
/// `pronunciation` is `None` until the card is revealed, so a renderer
/// cannot leak the answer early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Displayed text. `None` only when the corpus is empty.
    pub text: Option<String>,
    /// Romanization, present only when revealed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub revealed: bool,
    pub mode: Mode,
    /// Items shown in the current cycle.
    pub shown: usize,
    /// Size of the active corpus.
    pub total: usize,
}

/// Full deck state for explicit handoff between requests.
///
/// Restored verbatim; see [`crate::deck::DeckSession::from_state`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Handoff format version.
    pub version: u32,
    pub mode: Mode,
    pub remaining: Vec<Item>,
    pub used: Vec<Item>,
    pub current: Option<Item>,
    pub revealed: bool,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for snapshots and listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for starting a drill session.
#[derive(Debug, Default)]
pub struct DrillConfig {
    /// Corpus to start with.
    pub mode: Mode,
    /// Fixed RNG seed (None = seeded from the OS).
    pub seed: Option<u64>,
}

/// Configuration for the state-file handoff.
#[derive(Debug)]
pub struct StateConfig {
    /// Where the session state lives between invocations.
    /// Default: <data dir>/tamil-drill/session.json
    pub state_path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::new(), // Will be set at runtime
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(Mode::Characters.toggled(), Mode::Words);
        assert_eq!(Mode::Words.toggled(), Mode::Characters);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Words).unwrap(), "\"words\"");
        let parsed: Mode = serde_json::from_str("\"characters\"").unwrap();
        assert_eq!(parsed, Mode::Characters);
    }

    #[test]
    fn hidden_snapshot_omits_pronunciation_in_json() {
        let snapshot = Snapshot {
            text: Some("க".into()),
            pronunciation: None,
            revealed: false,
            mode: Mode::Characters,
            shown: 1,
            total: 300,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("pronunciation"));
        assert!(json.contains("\"revealed\":false"));
    }
}
