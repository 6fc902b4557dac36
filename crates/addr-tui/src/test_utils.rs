//! Rendering harness for widget and view tests
//!
//! Draws into ratatui's in-memory `TestBackend` so assertions can be made on
//! the text that would reach the terminal.

use addr_app::AppState;
use addr_core::{District, Province, Ward};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, widgets::Widget, Frame, Terminal};

/// Default harness size, a classic 80x24 terminal
pub const COLS: u16 = 80;
pub const ROWS: u16 = 24;

pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(COLS, ROWS)
    }

    pub fn with_size(cols: u16, rows: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(cols, rows))
            .expect("TestBackend terminal is infallible");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        self.buffer().area
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.draw_with(|frame| frame.render_widget(widget, area));
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, draw: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(draw).expect("draw to TestBackend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    pub fn line_contains(&self, row: u16, text: &str) -> bool {
        row_text(self.buffer(), row).contains(text)
    }

    /// Every row of the buffer, newline separated
    pub fn content(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|row| row_text(buffer, row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn row_text(buffer: &Buffer, row: u16) -> String {
    if row >= buffer.area.height {
        return String::new();
    }
    (0..buffer.area.width)
        .map(|col| buffer[(col, row)].symbol())
        .collect()
}

/// A ready state with a small province list loaded
pub fn ready_state() -> AppState {
    let mut state = AppState::new();
    state.phase = addr_app::LoadPhase::Ready;
    state.provinces = vec![
        Province::new("01", "Hà Nội"),
        Province::new("79", "Hồ Chí Minh"),
    ];
    state
}

pub fn districts() -> Vec<District> {
    vec![
        District::new("001", "Ba Đình"),
        District::new("002", "Hoàn Kiếm"),
    ]
}

pub fn wards() -> Vec<Ward> {
    vec![Ward::new("00001", "Phúc Xá"), Ward::new("00004", "Trúc Bạch")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_default_size() {
        assert_eq!(TestTerminal::new().area(), Rect::new(0, 0, COLS, ROWS));
    }

    #[test]
    fn test_text_lookup() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Xin chào"), term.area());

        assert!(term.buffer_contains("Xin chào"));
        assert!(term.line_contains(0, "Xin chào"));
        assert!(!term.line_contains(1, "Xin chào"));
    }
}
