//! Keyboard routing across the bar, the inline dropdowns and the overflow
//! surface.

use std::borrow::Cow;

use crossterm::event::KeyCode;
use navbar::{Activation, InlineMenu, LayoutMode, MenuEntry, NavbarView, OverflowMenu};

/// A focusable position on the bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Inline(usize),
    More,
    Trailing(usize),
}

/// Focusable slots for `view`, in bar order.
pub fn slots(view: &NavbarView<'_>) -> Vec<Slot> {
    let mut slots: Vec<Slot> = (0..view.inline().len()).map(Slot::Inline).collect();
    if !view.overflow().is_empty() {
        slots.push(Slot::More);
    }
    slots.extend((0..view.trailing().len()).map(Slot::Trailing));
    slots
}

/// The menu entry behind a slot. The "more" button has none.
pub fn slot_entry<'v>(view: &'v NavbarView<'_>, slot: Slot) -> Option<Cow<'v, MenuEntry>> {
    match slot {
        Slot::Inline(i) => view.inline().get(i).map(|e| Cow::Borrowed(*e)),
        Slot::More => None,
        Slot::Trailing(i) => view.trailing().get(i).map(|a| Cow::Owned(a.entry())),
    }
}

/// Presenter state plus bar focus, owned by the app.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub focused: usize,
    pub overflow: OverflowMenu,
    pub inline: InlineMenu,
    /// Layout the state was last synced against.
    layout: Option<LayoutMode>,
}

impl NavState {
    /// Drop state that no longer matches the current view: everything when
    /// the layout switched, dropdowns of entries that moved to the overflow,
    /// an overflow surface with nothing in it, and focus past the last slot.
    pub fn sync(&mut self, view: &NavbarView<'_>) {
        let layout = view.layout();
        if self.layout.is_some_and(|previous| previous != layout) {
            tracing::debug!(?layout, "Layout switched, closing menus");
            self.reset();
            self.focused = 0;
        }
        self.layout = Some(layout);

        let slots = slots(view);
        self.focused = self.focused.min(slots.len().saturating_sub(1));

        let trailing: Vec<MenuEntry> = view.trailing().iter().map(|a| a.entry()).collect();
        let mut anchored = view.inline();
        anchored.extend(trailing.iter());
        self.inline.retain(&anchored);

        if view.overflow().is_empty() {
            if self.overflow.open {
                self.overflow.close();
            }
        } else {
            self.overflow.clamp(view.overflow());
        }
    }

    pub fn focused_slot(&self, view: &NavbarView<'_>) -> Option<Slot> {
        slots(view).get(self.focused).copied()
    }

    pub fn handle_key(
        &mut self,
        view: &NavbarView<'_>,
        code: KeyCode,
        shift: bool,
    ) -> Option<Activation> {
        self.sync(view);

        if self.overflow.open {
            return self.handle_overflow_key(view, code, shift);
        }

        let slot = self.focused_slot(view)?;
        let entry = slot_entry(view, slot);

        if let Some(entry) = entry.as_deref() {
            if self.inline.is_open(&entry.label) {
                match code {
                    KeyCode::Up => {
                        self.inline.move_up(&entry.label);
                        return None;
                    }
                    KeyCode::Down => {
                        self.inline.move_down(entry);
                        return None;
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => return self.inline.select_current(entry),
                    KeyCode::Esc => {
                        self.inline.close(&entry.label);
                        return None;
                    }
                    KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                        self.inline.close(&entry.label);
                    }
                    _ => return None,
                }
            }
        }

        let slot_count = slots(view).len();
        match code {
            KeyCode::Left | KeyCode::BackTab => {
                self.focused = self.focused.saturating_sub(1);
                None
            }
            KeyCode::Right | KeyCode::Tab => {
                if self.focused + 1 < slot_count {
                    self.focused += 1;
                }
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match entry {
                Some(entry) => self.inline.click(&entry),
                None => {
                    self.overflow.open();
                    None
                }
            },
            KeyCode::Down => match entry {
                Some(entry) if entry.has_children() => self.inline.click(&entry),
                Some(_) => None,
                None => {
                    self.overflow.open();
                    None
                }
            },
            _ => None,
        }
    }

    fn handle_overflow_key(
        &mut self,
        view: &NavbarView<'_>,
        code: KeyCode,
        shift: bool,
    ) -> Option<Activation> {
        let entries = view.overflow();
        match code {
            KeyCode::Up if shift => self.overflow.prev_group(entries),
            KeyCode::Up => self.overflow.move_up(),
            KeyCode::Down if shift => self.overflow.next_group(entries),
            KeyCode::Down => self.overflow.move_down(entries),
            KeyCode::Enter | KeyCode::Char(' ') => return self.overflow.activate_selected(entries),
            KeyCode::Esc => self.overflow.close(),
            _ => {}
        }
        None
    }

    /// Close every surface, as after navigating away.
    pub fn reset(&mut self) {
        self.overflow.close();
        self.inline = InlineMenu::new();
    }
}
