pub mod dropdown;
pub mod icons;
pub mod navbar_bar;
pub mod notice;
pub mod overflow_menu;

pub use dropdown::DropdownWidget;
pub use navbar_bar::{bar_items, slot_areas, BarItem, NavbarBarWidget, BAR_HEIGHT};
pub use notice::{Notice, NoticeKind, NoticeWidget};
pub use overflow_menu::OverflowMenuWidget;

use ratatui::layout::Rect;

/// Place a `width` x `height` popup whose top-left corner is at
/// (`x`, `top`), shifted left and shrunk as needed to stay inside `bounds`.
pub(crate) fn popup_at(x: u16, top: u16, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.bottom().saturating_sub(top));
    let x = x.min(bounds.right().saturating_sub(width)).max(bounds.x);
    Rect::new(x, top, width, height)
}
