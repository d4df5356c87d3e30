use navbar::{DropdownState, MenuEntry};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::{icons, popup_at};
use crate::ui::theme::Theme;

/// An inline button's dropdown, anchored under the button at column `x`.
pub struct DropdownWidget<'a> {
    pub entry: &'a MenuEntry,
    pub state: DropdownState,
    pub x: u16,
    pub top: u16,
    pub theme: &'a Theme,
}

impl Widget for DropdownWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let texts: Vec<String> = self
            .entry
            .children
            .iter()
            .map(|child| match icons::leading(child) {
                Some(glyph) => format!("{} {}", glyph, child.label),
                None => format!("  {}", child.label),
            })
            .collect();

        let content_width = texts
            .iter()
            .map(|t| Line::from(t.as_str()).width() + 3)
            .max()
            .unwrap_or(0);
        let width = u16::try_from(content_width + 2).unwrap_or(u16::MAX);
        let height = u16::try_from(texts.len() + 2).unwrap_or(u16::MAX);
        let popup_area = popup_at(self.x, self.top, width, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.menu_border))
            .style(Style::default().bg(theme.menu_bg));
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let lines: Vec<Line> = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let is_selected = i == self.state.selected_index;
                let prefix = if is_selected { " \u{25b6}" } else { "  " };
                let style = if is_selected {
                    Style::default()
                        .fg(theme.menu_highlight)
                        .bg(theme.menu_highlight_bg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text_primary)
                };
                Line::from(Span::styled(format!("{}{}", prefix, text), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
