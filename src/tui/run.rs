//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//!
//! Every key press is handled to completion before the next one is read,
//! so deck mutations never interleave.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::types::{DrillConfig, Mode};

use super::state::{Action, App, Transition};
use super::update::{apply_effect, resolve_action, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Card
        KeyCode::Char(' ') | KeyCode::Char('r') => Some(Action::Reveal),
        KeyCode::Char('n') | KeyCode::Char('j') | KeyCode::Right => Some(Action::Next),
        KeyCode::Enter => Some(Action::Enter),

        // Decks
        KeyCode::Char('c') => Some(Action::SwitchMode(Mode::Characters)),
        KeyCode::Char('w') => Some(Action::SwitchMode(Mode::Words)),
        KeyCode::Tab => Some(Action::ToggleMode),

        // Navigation
        KeyCode::Char('?') => Some(Action::Help),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the interactive drill until the user quits.
pub fn run(config: &DrillConfig) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    info!(mode = %config.mode, seed = ?config.seed, "drill started");

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    info!("drill ended");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue, // ignore releases, mouse, resize (redrawn next pass)
        };

        let Some(action) = map_key(key) else {
            continue;
        };
        let action = resolve_action(action, app);

        match update(app.screen, &action, app.session.phase()) {
            Transition::Screen(screen) => app.screen = screen,
            Transition::Quit => app.should_quit = true,
            Transition::Effect(effect) => apply_effect(app, effect),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
