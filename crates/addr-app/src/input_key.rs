//! Abstract input key event, independent of terminal library.
//!
//! `addr-app` never sees crossterm types: the TUI converts its key events
//! into `InputKey` at the boundary so the form logic can be driven (and
//! tested) without a terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key, including non-ASCII input
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+s, ...)
    CharCtrl(char),

    Up,
    Down,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}
