use navbar::{AuxItem, InlineMenu, NavbarView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::icons;
use crate::ui::nav::{slot_entry, slots, Slot};
use crate::ui::theme::Theme;

/// Rows taken by the bar, borders included.
pub const BAR_HEIGHT: u16 = 3;

/// One rendered button on the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarItem {
    pub slot: Slot,
    pub text: String,
    /// Upcoming meetings, shown next to the profile button.
    pub badge: usize,
}

impl BarItem {
    fn label(&self) -> String {
        if self.badge > 0 {
            format!(" {} ({}) ", self.text, self.badge)
        } else {
            format!(" {} ", self.text)
        }
    }

    fn width(&self) -> u16 {
        u16::try_from(Line::from(self.label()).width()).unwrap_or(u16::MAX)
    }
}

pub fn bar_items(view: &NavbarView<'_>, inline: &InlineMenu, meeting_count: usize) -> Vec<BarItem> {
    slots(view)
        .into_iter()
        .map(|slot| {
            let text = match slot_entry(view, slot) {
                Some(entry) => icons::button_text(&entry, inline.is_open(&entry.label)),
                None => icons::MORE.to_string(),
            };
            let badge = match slot {
                Slot::Trailing(i) if view.trailing().get(i) == Some(&AuxItem::Profile) => {
                    meeting_count
                }
                _ => 0,
            };
            BarItem { slot, text, badge }
        })
        .collect()
}

/// Where each button lands inside the bar's inner `area`. Leading buttons
/// follow the logo left to right; trailing buttons hug the right edge.
/// Buttons that do not fit are clipped to the area.
pub fn slot_areas(items: &[BarItem], area: Rect) -> Vec<(Slot, Rect)> {
    let logo_width = u16::try_from(Line::from(icons::LOGO).width()).unwrap_or(0);
    let mut x = area.x.saturating_add(logo_width).saturating_add(2);

    let trailing_width: u16 = items
        .iter()
        .filter(|i| matches!(i.slot, Slot::Trailing(_)))
        .map(BarItem::width)
        .fold(0, u16::saturating_add);
    let mut trailing_x = area.right().saturating_sub(trailing_width).max(area.x);

    items
        .iter()
        .map(|item| {
            let width = item.width();
            let start = match item.slot {
                Slot::Trailing(_) => {
                    let start = trailing_x;
                    trailing_x = trailing_x.saturating_add(width);
                    start
                }
                _ => {
                    let start = x;
                    x = x.saturating_add(width);
                    start
                }
            };
            let rect = Rect::new(start, area.y, width, 1).intersection(area);
            (item.slot, rect)
        })
        .collect()
}

pub struct NavbarBarWidget<'a> {
    pub items: &'a [BarItem],
    pub focused: Option<Slot>,
    pub theme: &'a Theme,
}

impl Widget for NavbarBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.bar_border))
            .style(Style::default().bg(theme.bar_bg).fg(theme.bar_fg));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            icons::LOGO,
            Style::default()
                .fg(theme.logo)
                .add_modifier(Modifier::BOLD),
        )))
        .render(inner, buf);

        for (item, (slot, rect)) in self.items.iter().zip(slot_areas(self.items, inner)) {
            if rect.width == 0 {
                continue;
            }
            let style = if self.focused == Some(slot) {
                Style::default()
                    .fg(theme.focus_fg)
                    .bg(theme.focus_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.bar_fg)
            };
            let mut spans = vec![Span::styled(format!(" {}", item.text), style)];
            if item.badge > 0 {
                spans.push(Span::styled(
                    format!(" ({})", item.badge),
                    style.fg(theme.badge),
                ));
            }
            spans.push(Span::styled(" ", style));
            Paragraph::new(Line::from(spans)).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navbar::{AuthStatus, FixedWidth, Navbar, User};

    fn member() -> AuthStatus {
        AuthStatus::Authenticated(User {
            username: "jesse".to_string(),
            display_name: "Jesse".to_string(),
            dojo_cohort: "1400-1500".to_string(),
        })
    }

    #[test]
    fn test_badge_only_on_profile() {
        let navbar = Navbar::default();
        let view = navbar.view_for(&member(), &FixedWidth(1600));
        let items = bar_items(&view, &InlineMenu::new(), 3);
        let badged: Vec<_> = items.iter().filter(|i| i.badge > 0).collect();
        assert_eq!(badged.len(), 1);
        assert!(badged[0].text.contains("Profile"));
    }

    #[test]
    fn test_more_button_text() {
        let navbar = Navbar::default();
        let view = navbar.view_for(&member(), &FixedWidth(1200));
        let items = bar_items(&view, &InlineMenu::new(), 0);
        let more = items.iter().find(|i| i.slot == Slot::More);
        assert_eq!(more.map(|i| i.text.as_str()), Some(icons::MORE));
    }

    #[test]
    fn test_trailing_hugs_right_edge() {
        let navbar = Navbar::default();
        let view = navbar.view_for(&member(), &FixedWidth(1600));
        let items = bar_items(&view, &InlineMenu::new(), 0);
        let area = Rect::new(0, 0, 300, 1);
        let areas = slot_areas(&items, area);

        let (_, last) = areas[areas.len() - 1];
        assert_eq!(last.right(), area.right());
        let (_, first) = areas[0];
        assert!(first.x > 0);
        for pair in areas.windows(2) {
            assert!(pair[0].1.x < pair[1].1.x);
        }
    }

    #[test]
    fn test_areas_clip_to_bar() {
        let navbar = Navbar::default();
        let view = navbar.view_for(&member(), &FixedWidth(1600));
        let items = bar_items(&view, &InlineMenu::new(), 0);
        let area = Rect::new(0, 0, 40, 1);
        for (_, rect) in slot_areas(&items, area) {
            assert!(rect.right() <= area.right());
        }
    }
}
