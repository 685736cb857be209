//! State transitions: (Screen, Action) → Transition, and effect handling.
//!
//! `update` is pure and fully testable without a terminal. Each screen
//! defines which actions it accepts; unhandled actions return the
//! current screen unchanged. `apply_effect` is the only place the deck
//! session is mutated from the TUI.

use tracing::debug;

use crate::types::Phase;

use super::state::{Action, App, Effect, Screen, Transition};

/// Pure state transition function.
///
/// `phase` is the deck phase at the time of the key press; it decides
/// whether reveal and next mean anything.
pub fn update(screen: Screen, action: &Action, phase: Phase) -> Transition {
    match screen {
        Screen::Card => update_card(action, phase),
        Screen::Help => update_help(action),
    }
}

/// Apply a deck effect to the app. Failures become the notice line.
pub fn apply_effect(app: &mut App, effect: Effect) {
    debug!(?effect, "applying deck effect");
    let result = match effect {
        Effect::Reveal => {
            app.session.reveal();
            Ok(())
        }
        Effect::Next => app.session.next().map(|_| ()),
        Effect::SwitchMode(mode) => app.session.switch_mode(mode),
    };
    app.notice = result.err().map(|e| e.to_string());
    app.screen = Screen::Card;
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Card: reveal, advance, switch corpus.
fn update_card(action: &Action, phase: Phase) -> Transition {
    match (action, phase) {
        (Action::Reveal, Phase::Ready { revealed: false })
        | (Action::Enter, Phase::Ready { revealed: false }) => {
            Transition::Effect(Effect::Reveal)
        }
        (Action::Next, Phase::Ready { .. }) | (Action::Enter, Phase::Ready { revealed: true }) => {
            Transition::Effect(Effect::Next)
        }
        (Action::SwitchMode(mode), _) => Transition::Effect(Effect::SwitchMode(*mode)),
        (Action::Help, _) => Transition::Screen(Screen::Help),
        // Nothing behind the card, so Esc leaves
        (Action::Quit, _) | (Action::Back, _) => Transition::Quit,
        // Already revealed or empty deck
        _ => Transition::Screen(Screen::Card),
    }
}

/// Help: any dismissal returns to the card.
fn update_help(action: &Action) -> Transition {
    match action {
        Action::Back | Action::Help | Action::Enter => Transition::Screen(Screen::Card),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Help),
    }
}

/// Resolve a toggle against the current mode.
///
/// Kept apart from `update` so the transition function does not need
/// the session.
pub fn resolve_action(action: Action, app: &App) -> Action {
    match action {
        Action::ToggleMode => Action::SwitchMode(app.session.mode().toggled()),
        other => other,
    }
}

// ============================================================================
// TESTS
// ============================================================================
