//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: the revealed answer
//! - Yellow: notices (empty deck, failed draw)
//! - Cyan: interactive elements (active tab, keybinding hints)
//! - Dim: de-emphasized (progress, hidden placeholder)
//! - Bold: the glyph under study

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Revealed pronunciation.
pub const STYLE_ANSWER: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Warning / attention needed — yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized metadata — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The glyph or word being drilled.
pub const STYLE_GLYPH: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Active mode tab.
pub const STYLE_TAB_ACTIVE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Inactive mode tab.
pub const STYLE_TAB_INACTIVE: Style = Style::new().fg(Color::DarkGray);

/// Card border.
pub const STYLE_BORDER: Style = Style::new().fg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_ANSWER.fg, Some(Color::Green));
        assert_eq!(STYLE_WARNING.fg, Some(Color::Yellow));
        assert_eq!(STYLE_INTERACTIVE.fg, Some(Color::Cyan));
        assert_eq!(STYLE_DIM.fg, Some(Color::DarkGray));
    }

    #[test]
    fn glyph_style_is_bold() {
        assert!(STYLE_GLYPH.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn active_tab_is_highlighted() {
        assert_eq!(STYLE_TAB_ACTIVE.bg, Some(Color::Cyan));
        assert_eq!(STYLE_TAB_INACTIVE.bg, None);
    }
}
