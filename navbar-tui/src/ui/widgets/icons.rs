//! Single-column glyphs standing in for the site's icon font.

use navbar::{Icon, MenuEntry};

pub const LOGO: &str = "♞ ChessDojo";
pub const MORE: &str = "☰";
pub const EXPANDED: &str = "▴";
pub const COLLAPSED: &str = "▾";
/// Used for entries with children but no icon of their own.
pub const GROUP: &str = "›";

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Feed => "≡",
        Icon::Checklist => "✓",
        Icon::Scoreboard => "▤",
        Icon::Group | Icon::Groups => "☷",
        Icon::Language => "◍",
        Icon::ThumbUp => "↑",
        Icon::Search => "⌕",
        Icon::AutoGraph => "∿",
        Icon::Tournaments | Icon::MilitaryTech => "♛",
        Icon::Pawn => "♟",
        Icon::Calendar => "▦",
        Icon::MenuBook | Icon::AutoStories => "▥",
        Icon::ImportContacts => "◫",
        Icon::Speed => "»",
        Icon::LocalFire => "✦",
        Icon::BorderColor => "✎",
        Icon::Psychology => "◎",
        Icon::SignalCellular => "▲",
        Icon::Forum => "✉",
        Icon::Sell => "$",
        Icon::RocketLaunch => "➚",
        Icon::Storefront => "⌂",
        Icon::Help => "?",
        Icon::Notifications => "♪",
        Icon::Logout => "⏻",
        Icon::Person => "☺",
        Icon::Blog => "¶",
        Icon::Login => "→",
        Icon::PersonAdd => "+",
    }
}

/// Leading glyph for an entry, if it has one.
pub fn leading(entry: &MenuEntry) -> Option<&'static str> {
    match entry.icon {
        Some(icon) => Some(glyph(icon)),
        None if entry.has_children() => Some(GROUP),
        None => None,
    }
}

/// Button text for a bar slot: glyph, label and a dropdown marker for
/// parents.
pub fn button_text(entry: &MenuEntry, open: bool) -> String {
    let mut text = match leading(entry) {
        Some(glyph) => format!("{} {}", glyph, entry.label),
        None => entry.label.clone(),
    };
    if entry.has_children() {
        text.push(' ');
        text.push_str(if open { EXPANDED } else { COLLAPSED });
    }
    text
}
