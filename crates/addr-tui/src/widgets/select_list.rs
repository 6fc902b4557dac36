//! Select list for one level of the cascading location selection

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SELECTED_MARKER: &str = "● ";
const UNSELECTED_MARKER: &str = "  ";
const EMPTY_TEXT: &str = "(trống)";

/// Bordered list of `(id, name)` rows.
///
/// The selected row carries a marker; the highlighted row is inverted while
/// the list has focus.
pub struct SelectList<'a> {
    label: &'a str,
    options: &'a [(&'a str, &'a str)],
    selected_id: &'a str,
    cursor: usize,
    focused: bool,
}

impl<'a> SelectList<'a> {
    pub fn new(label: &'a str, options: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            label,
            options,
            selected_id: "",
            cursor: 0,
            focused: false,
        }
    }

    pub fn selected(mut self, id: &'a str) -> Self {
        self.selected_id = id;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// First row to draw so the cursor stays visible
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        let cursor = self.cursor.min(self.options.len().saturating_sub(1));
        cursor.saturating_sub(visible_rows - 1)
    }
}

impl Widget for SelectList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::field_block(self.label, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.options.is_empty() {
            Paragraph::new(Span::styled(EMPTY_TEXT, styles::text_muted())).render(inner, buf);
            return;
        }

        let visible_rows = inner.height as usize;
        let offset = self.scroll_offset(visible_rows);

        let lines: Vec<Line> = self
            .options
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(index, (id, name))| {
                let is_selected = !self.selected_id.is_empty() && *id == self.selected_id;
                let marker = if is_selected {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_MARKER
                };
                let style = if self.focused && index == self.cursor {
                    styles::focused_selected()
                } else if is_selected {
                    styles::accent()
                } else {
                    styles::text_primary()
                };
                Line::from(Span::styled(format!("{}{}", marker, name), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
