//! Submit button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub const LABEL: &str = "Thêm địa chỉ mới";

pub struct SubmitButton {
    focused: bool,
}

impl SubmitButton {
    pub fn new(focused: bool) -> Self {
        Self { focused }
    }
}

impl Widget for SubmitButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        Paragraph::new(Span::styled(
            format!(" {} ", LABEL),
            styles::button(self.focused),
        ))
        .alignment(Alignment::Center)
        .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;

    #[test]
    fn test_button_label() {
        let mut term = TestTerminal::new();
        term.render_widget(SubmitButton::new(false), Rect::new(0, 0, 40, 3));
        assert!(term.buffer_contains("Thêm địa chỉ mới"));
    }

    #[test]
    fn test_focused_button_is_reversed() {
        let mut term = TestTerminal::new();
        term.render_widget(SubmitButton::new(true), Rect::new(0, 0, 40, 3));

        let cell = &term.buffer()[(20, 1)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }
}
