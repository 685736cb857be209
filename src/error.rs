//! Error types for tamil-drill.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Mode;

/// Result type alias using DrillError.
pub type Result<T> = std::result::Result<T, DrillError>;

/// Errors surfaced by the deck and the state handoff.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The active corpus has no items; the session is in the empty state.
    #[error("no items available in {mode} mode")]
    EmptyCorpus { mode: Mode },

    /// A draw came back empty after a successful initialization.
    /// The remaining/used partition no longer covers the corpus.
    #[error("deck exhausted unexpectedly in {mode} mode")]
    Exhausted { mode: Mode },

    /// A restored session does not match its corpus.
    #[error("invalid session state: {0}")]
    InvalidState(String),

    #[error("cannot access state file {}: {source}", .path.display())]
    StateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed state file {}: {source}", .path.display())]
    StateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
