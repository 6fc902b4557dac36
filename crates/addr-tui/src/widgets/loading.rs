//! Placeholder shown instead of the form while lists load

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const LOADING_TEXT: &str = "Đang tải...";

pub struct LoadingPlaceholder;

impl Widget for LoadingPlaceholder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        Paragraph::new(Span::styled(
            LOADING_TEXT,
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center)
        .render(middle, buf);
    }
}
