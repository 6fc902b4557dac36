//! Single-line text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::styles;

const CURSOR: &str = "_";

/// Bordered text field with the label as its title
pub struct TextInput<'a> {
    label: &'a str,
    value: &'a str,
    placeholder: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            placeholder: None,
            focused: false,
        }
    }

    /// Shown muted while the value is empty and the field is not focused
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::field_block(self.label, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = match (self.value.is_empty(), self.focused, self.placeholder) {
            (true, false, Some(placeholder)) => {
                Line::from(Span::styled(placeholder, styles::text_muted()))
            }
            (_, true, _) => {
                // Keep the end of the text and the cursor in view
                let room = (inner.width as usize).saturating_sub(CURSOR.len());
                Line::from(vec![
                    Span::styled(visible_tail(self.value, room), styles::text_primary()),
                    Span::styled(CURSOR, styles::accent()),
                ])
            }
            _ => Line::from(Span::styled(
                visible_tail(self.value, inner.width as usize),
                styles::text_primary(),
            )),
        };

        Paragraph::new(line).render(inner, buf);
    }
}

/// The longest suffix of `text` that fits in `max_width` terminal columns
pub fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        start = idx;
    }
    &text[start..]
}
