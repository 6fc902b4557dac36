//! Status bar: the current toast, or key hints when there is none

use addr_app::Notification;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: &[(&str, &str)] = &[
    ("Tab", "chuyển ô"),
    ("↑↓ Enter", "chọn"),
    ("Ctrl+S", "lưu"),
    ("Esc", "quay lại"),
    ("Ctrl+C", "thoát"),
];

pub struct StatusBar<'a> {
    notification: Option<&'a Notification>,
}

impl<'a> StatusBar<'a> {
    pub fn new(notification: Option<&'a Notification>) -> Self {
        Self { notification }
    }

    fn hint_spans() -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notification {
            Some(notification) => Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    notification.message.as_str(),
                    styles::notification(notification.level),
                ),
            ]),
            None => Line::from(Self::hint_spans()),
        };

        Paragraph::new(line).render(area, buf);
    }
}
