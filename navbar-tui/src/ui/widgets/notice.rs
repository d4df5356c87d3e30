use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-off message shown at the bottom of the screen until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

pub struct NoticeWidget<'a> {
    pub notice: &'a Notice,
    pub theme: &'a Theme,
}

impl Widget for NoticeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = 4.min(area.height);
        let notice_area = Rect::new(area.x, area.bottom() - height, area.width, height);

        let (title, color) = match self.notice.kind {
            NoticeKind::Info => (" Notice ", self.theme.info),
            NoticeKind::Error => (" Error ", self.theme.negative),
        };

        Clear.render(notice_area, buf);
        let block = Block::default()
            .title(title)
            .title_bottom(Line::from(Span::styled(
                " Esc: Dismiss ",
                Style::default().fg(self.theme.muted),
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(self.theme.menu_bg));
        let inner = block.inner(notice_area);
        block.render(notice_area, buf);

        Paragraph::new(Span::styled(
            self.notice.message.as_str(),
            Style::default().fg(self.theme.text_primary),
        ))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
    }
}
