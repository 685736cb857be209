//! TUI module for the interactive drill.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: app model and action/transition types
//! - `update`: pure transitions plus deck effect handling
//! - `view`: pure rendering
//! - `theme`: style constants
//! - `run`: effects (terminal, key loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;

pub use run::run;
