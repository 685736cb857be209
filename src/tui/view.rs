//! Pure rendering: map App state to ratatui widget trees.
//!
//! The card screen renders from the session's read-only snapshot, so the
//! pronunciation only reaches the terminal after a reveal.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::types::{Mode, Snapshot};

use super::state::{App, Screen};
use super::theme;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(1), // mode tabs
        Constraint::Min(0),    // content
        Constraint::Length(1), // notice
        Constraint::Length(1), // help
    ])
    .split(area);

    let snapshot = app.session.snapshot();

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_tabs(snapshot.mode), chunks[1]);
    frame.render_widget(render_notice(app.notice.as_deref()), chunks[3]);
    frame.render_widget(render_help(&app.screen, &snapshot), chunks[4]);

    let content_area = chunks[2];
    match app.screen {
        Screen::Card => render_card(&snapshot, frame, content_area),
        Screen::Help => render_keys(frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Card => "tamil-drill",
        Screen::Help => "tamil-drill · keys",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

/// Mode tabs with the active corpus highlighted.
fn render_tabs(active: Mode) -> Paragraph<'static> {
    let tab = |mode: Mode, key: char| {
        let style = if mode == active {
            theme::STYLE_TAB_ACTIVE
        } else {
            theme::STYLE_TAB_INACTIVE
        };
        Span::styled(format!(" [{}] {} ", key, mode.label()), style)
    };

    Paragraph::new(Line::from(vec![
        tab(Mode::Characters, 'c'),
        Span::raw(" "),
        tab(Mode::Words, 'w'),
    ]))
}

fn render_notice(notice: Option<&str>) -> Paragraph<'_> {
    match notice {
        Some(text) => Paragraph::new(Span::styled(format!("! {}", text), theme::STYLE_WARNING)),
        None => Paragraph::new(""),
    }
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen, snapshot: &Snapshot) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Card if snapshot.text.is_none() => "[c/w] switch deck  [?] keys  [q/Esc] quit",
        Screen::Card if snapshot.revealed => "[n/Enter] next  [Tab] mode  [?] keys  [q/Esc] quit",
        Screen::Card => "[Space] reveal  [n] next  [Tab] mode  [?] keys  [q/Esc] quit",
        Screen::Help => "[Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: CARD
// ============================================================================

fn render_card(snapshot: &Snapshot, frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_style(theme::STYLE_BORDER)
        .title(Span::styled(
            format!(" {}/{} ", snapshot.shown, snapshot.total),
            theme::STYLE_DIM,
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // glyph
        Constraint::Length(1),
        Constraint::Length(1), // answer
        Constraint::Fill(1),
    ])
    .split(inner);

    let Some(text) = &snapshot.text else {
        render_empty(snapshot.mode, frame, rows[1].union(rows[3]));
        return;
    };

    let glyph = Paragraph::new(Span::styled(text.clone(), theme::STYLE_GLYPH))
        .alignment(Alignment::Center);
    frame.render_widget(glyph, rows[1]);

    let answer = match &snapshot.pronunciation {
        Some(pron) => Span::styled(pron.clone(), theme::STYLE_ANSWER),
        None => Span::styled("· · ·", theme::STYLE_DIM),
    };
    frame.render_widget(Paragraph::new(answer).alignment(Alignment::Center), rows[3]);
}

fn render_empty(mode: Mode, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("No items available in {} mode.", mode),
            theme::STYLE_WARNING,
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Switch deck with "),
            Span::styled("[c]", theme::STYLE_INTERACTIVE),
            Span::raw(" or "),
            Span::styled("[w]", theme::STYLE_INTERACTIVE),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: HELP
// ============================================================================

const KEYS: &[(&str, &str)] = &[
    ("Space / r", "reveal pronunciation"),
    ("n / j / →", "next card"),
    ("Enter", "reveal, then next"),
    ("c", "characters deck"),
    ("w", "words deck"),
    ("Tab", "toggle deck"),
    ("?", "this screen"),
    ("Esc", "back, or quit from the card"),
    ("q / ^C", "quit"),
];

fn render_keys(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from("")];
    for (keys, what) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", keys), theme::STYLE_INTERACTIVE),
            Span::raw(*what),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Each deck shows every card once before reshuffling.",
        theme::STYLE_DIM,
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
