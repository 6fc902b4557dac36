//! addr-tui - Terminal UI for the add-address view
//!
//! Renders the form built by `addr-app` with ratatui and feeds crossterm key
//! events back into its engine.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::{run, RunOutcome};
