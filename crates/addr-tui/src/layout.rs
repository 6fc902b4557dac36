//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of a bordered single-line field
const FIELD_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + back hint
    pub header: Rect,

    /// The form, or the loading placeholder
    pub body: Rect,

    /// Toast or key hints
    pub status: Rect,
}

/// Areas of the form inside `ScreenAreas::body`
///
/// Contact details and the composite preview on the left, the cascading
/// selects and the free-text part on the right.
#[derive(Debug, Clone, Copy)]
pub struct FormAreas {
    pub full_name: Rect,
    pub email: Rect,
    pub phone_number: Rect,
    pub full_address: Rect,
    pub submit: Rect,

    pub province: Rect,
    pub district: Rect,
    pub ward: Rect,
    pub specific_address: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

pub fn create_form(body: Rect) -> FormAreas {
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(body);

    let left = Layout::vertical([
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(0),
    ])
    .split(columns[0]);

    let right = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Fill(1),
        Constraint::Length(FIELD_HEIGHT),
    ])
    .split(columns[1]);

    FormAreas {
        full_name: left[0],
        email: left[1],
        phone_number: left[2],
        full_address: left[3],
        submit: left[4],
        province: right[0],
        district: right[1],
        ward: right[2],
        specific_address: right[3],
    }
}
