//! TUI state algebra: app model, actions, transitions.
//!
//! The deck session owns all drill state. Screens carry only what is
//! specific to the terminal front-end. The transition function never
//! touches the session; it describes deck effects and the effects layer
//! applies them.

use crate::deck::DeckSession;
use crate::types::{DrillConfig, Mode};

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen.
    pub screen: Screen,

    /// The drill deck driving the card screen.
    pub session: DeckSession,

    /// One-line message from the last failed deck effect.
    pub notice: Option<String>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The flashcard, or the empty notice when the corpus has no items.
    #[default]
    Card,
    /// Keybinding reference.
    Help,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the pronunciation.
    Reveal,
    /// Draw the next card.
    Next,
    /// Reveal if hidden, otherwise draw the next card.
    Enter,
    /// Jump to a specific corpus.
    SwitchMode(Mode),
    /// Flip between characters and words.
    ToggleMode,
    /// Open the help screen.
    Help,
    /// Leave the current screen.
    Back,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq, Eq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
    /// Apply a deck operation, then stay on the card screen.
    Effect(Effect),
}

/// Deck operation requested by a pure transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Reveal,
    Next,
    SwitchMode(Mode),
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the card screen with a freshly shuffled deck.
    pub fn new(config: &DrillConfig) -> Self {
        let (session, started) = DeckSession::from_config(config);
        let mut app = Self::with_session(session);
        app.notice = started.err().map(|e| e.to_string());
        app
    }

    /// Create an App around an existing session.
    pub fn with_session(session: DeckSession) -> Self {
        let notice = session.ensure_ready().err().map(|e| e.to_string());
        App {
            screen: Screen::Card,
            session,
            notice,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
