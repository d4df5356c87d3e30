use navbar::{OverflowEntry, OverflowMenu, OverflowRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::{icons, popup_at};
use crate::ui::theme::Theme;

const HINT: &str = " Esc: Close  Enter: Select  Shift+↑↓: Group";

/// Text for one overflow row, indented by depth.
pub fn row_text(row: &OverflowRow, badge: usize) -> String {
    let indent = "  ".repeat(usize::from(row.depth));
    let glyph = match (row.icon, row.has_children) {
        (Some(icon), _) => icons::glyph(icon),
        (None, true) => icons::GROUP,
        (None, false) => " ",
    };
    let mut text = format!("{}{} {}", indent, glyph, row.label);
    if badge > 0 {
        text.push_str(&format!(" ({})", badge));
    }
    if row.has_children {
        text.push(' ');
        text.push_str(if row.expanded {
            icons::EXPANDED
        } else {
            icons::COLLAPSED
        });
    }
    text
}

/// First row to draw so that `selected` fits in `capacity` visible rows.
pub fn scroll_offset(selected: usize, capacity: usize) -> usize {
    if capacity == 0 {
        return selected;
    }
    (selected + 1).saturating_sub(capacity)
}

/// The "more" surface, dropped down from the bar at column `x`.
pub struct OverflowMenuWidget<'a> {
    pub entries: &'a [OverflowEntry<'a>],
    pub menu: &'a OverflowMenu,
    pub x: u16,
    pub top: u16,
    pub meeting_count: usize,
    pub theme: &'a Theme,
}

impl Widget for OverflowMenuWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let rows = self.menu.rows(self.entries);
        let texts: Vec<String> = rows
            .iter()
            .map(|row| {
                let badge = match (row.depth, self.entries.get(row.entry_index)) {
                    (0, Some(OverflowEntry::Notifications)) => self.meeting_count,
                    _ => 0,
                };
                row_text(row, badge)
            })
            .collect();

        let content_width = texts
            .iter()
            .map(|t| Line::from(t.as_str()).width() + 3)
            .chain(std::iter::once(Line::from(HINT).width()))
            .max()
            .unwrap_or(0);
        let width = u16::try_from(content_width + 2).unwrap_or(u16::MAX);
        let height = u16::try_from(rows.len() + 4).unwrap_or(u16::MAX); // rows + border + blank + hint
        let popup_area = popup_at(self.x, self.top, width, height, area);

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" More ")
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(theme.menu_border)
                    .add_modifier(Modifier::BOLD),
            )
            .style(Style::default().bg(theme.menu_bg));
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        // blank line and hint stay pinned below the rows
        let capacity = usize::from(inner.height.saturating_sub(2));
        let offset = scroll_offset(self.menu.selected_index, capacity);

        let mut lines = Vec::with_capacity(capacity + 2);
        for (i, (row, text)) in rows
            .iter()
            .zip(texts)
            .enumerate()
            .skip(offset)
            .take(capacity.max(1))
        {
            let is_selected = i == self.menu.selected_index;
            let prefix = if is_selected { " \u{25b6}" } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(theme.menu_highlight)
                    .bg(theme.menu_highlight_bg)
                    .add_modifier(Modifier::BOLD)
            } else if row.depth > 0 {
                Style::default().fg(theme.text_secondary)
            } else {
                Style::default().fg(theme.text_primary)
            };
            lines.push(Line::from(Span::styled(format!("{}{}", prefix, text), style)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            HINT,
            Style::default().fg(theme.muted),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
