//! Header bar with the view title and the way back

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

pub const TITLE: &str = "Thêm địa chỉ mới";

/// Title on the left, `Esc` back hint on the right
pub struct FormHeader<'a> {
    profile_route: &'a str,
}

impl<'a> FormHeader<'a> {
    pub fn new(profile_route: &'a str) -> Self {
        Self { profile_route }
    }
}

impl Widget for FormHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let hint = format!("Esc ← {}", self.profile_route);
        let title_width = TITLE.width() + 1;
        let padding = (inner.width as usize).saturating_sub(title_width + hint.width());

        let mut spans = vec![Span::raw(" "), Span::styled(TITLE, styles::accent_bold())];
        // Drop the hint rather than overlap the title on narrow terminals
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(hint, styles::keybinding()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
