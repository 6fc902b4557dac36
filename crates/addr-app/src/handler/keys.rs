//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, FormField};

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Honoured in every phase
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Esc => return Some(Message::Back),
        _ => {}
    }

    // The form is hidden behind the loading placeholder
    if state.is_loading() {
        return None;
    }

    match key {
        InputKey::CharCtrl('s') => Some(Message::Submit),
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        _ if state.focus.is_text_input() => handle_text_key(state, key),
        _ if state.focus.is_select() => handle_select_key(key),
        _ => handle_submit_key(key),
    }
}

fn handle_text_key(state: &AppState, key: InputKey) -> Option<Message> {
    let field = state.focus;
    let mut value = state.text_value(field).to_string();

    match key {
        InputKey::Char(c) => value.push(c),
        InputKey::Backspace => {
            value.pop()?;
        }
        InputKey::Enter | InputKey::Down => return Some(Message::FocusNext),
        InputKey::Up => return Some(Message::FocusPrev),
        _ => return None,
    }

    Some(if field == FormField::SpecificAddress {
        Message::SpecificAddressEdited { text: value }
    } else {
        Message::FieldEdited { field, value }
    })
}

fn handle_select_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::HighlightUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::HighlightDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ConfirmHighlight),
        _ => None,
    }
}

fn handle_submit_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::Submit),
        InputKey::Up => Some(Message::FocusPrev),
        _ => None,
    }
}
