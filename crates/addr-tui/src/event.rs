//! Crossterm input, translated for the form

use std::time::Duration;

use addr_app::{InputKey, Message};
use addr_core::Result;
use crossterm::event::{self as term_event, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Frame interval; a quiet interval becomes a `Tick`
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Map a crossterm key to the keys the form understands
pub fn to_input_key(key: KeyEvent) -> Option<InputKey> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    let input = match key.code {
        KeyCode::Char(c) if ctrl => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Tab if shift => InputKey::BackTab,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Backspace => InputKey::Backspace,
        _ => return None,
    };
    Some(input)
}

/// Wait up to one frame for input.
///
/// Key releases and repeats reported by some terminals are dropped so each
/// press edits once.
pub fn poll() -> Result<Option<Message>> {
    if !term_event::poll(POLL_INTERVAL)? {
        return Ok(Some(Message::Tick));
    }

    Ok(match term_event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => to_input_key(key).map(Message::Key),
        _ => None,
    })
}
