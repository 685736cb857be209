//! Session state handoff for hosts that keep no memory between requests.
//!
//! Structure:
//! - Pure functions: path resolution
//! - Effect functions: state file load/save
//!
//! The file is only read or written when a caller asks for it. Saves go
//! through a temp file in the same directory and a rename, so a crash
//! mid-write leaves the previous state intact.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{DrillError, Result};
use crate::types::{SessionState, StateConfig};

/// State filename within the data directory.
const STATE_FILENAME: &str = "session.json";

// ============================================================================
// PURE FUNCTIONS (Computations)
// ============================================================================

/// Returns the default state file path.
///
/// On Linux: ~/.local/share/tamil-drill/session.json
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tamil-drill")
        .join(STATE_FILENAME)
}

/// Resolve the configured path, falling back to the default.
pub fn resolve_state_path(config: &StateConfig) -> PathBuf {
    if config.state_path.as_os_str().is_empty() {
        default_state_path()
    } else {
        config.state_path.clone()
    }
}

// ============================================================================
// EFFECT FUNCTIONS (Actions)
// ============================================================================

/// Load state from disk. `Ok(None)` when no state has been saved yet.
pub fn load_state(path: &Path) -> Result<Option<SessionState>> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DrillError::StateFile {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let state = serde_json::from_str(&contents).map_err(|source| DrillError::StateFormat {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded session state");
    Ok(Some(state))
}

/// Save state to disk, creating the parent directory if needed.
pub fn save_state(state: &SessionState, path: &Path) -> Result<()> {
    let contents = serde_json::to_string_pretty(state).map_err(|source| DrillError::StateFormat {
        path: path.to_path_buf(),
        source,
    })?;

    write_atomic(path, contents.as_bytes()).map_err(|source| DrillError::StateFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved session state");
    Ok(())
}

/// Remove saved state. Missing file is not an error.
pub fn clear_state(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(DrillError::StateFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
