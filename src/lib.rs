//! tamil-drill: flashcard drill for Tamil script glyphs and words.

pub mod corpus;
pub mod deck;
pub mod error;
pub mod logging;
pub mod report;
pub mod session_store;
pub mod tui;
pub mod types;
