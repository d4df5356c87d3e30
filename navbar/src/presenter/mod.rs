//! Presenter state for the two menu surfaces.
//!
//! Presenters own all transient UI state (which dropdown is open, which
//! overflow groups are expanded). Activating an entry never runs a side
//! effect directly: it returns an [`Activation`] for the caller to perform.

mod inline;
mod overflow;

pub use inline::{DropdownState, InlineMenu};
pub use overflow::{OverflowMenu, OverflowRow};

use crate::catalog::{Action, MenuEntry};

/// What the caller should do after an entry was clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate(String),
    OpenExternal(String),
    SignOut,
    /// An overflow group was expanded or collapsed.
    Toggled { label: String, expanded: bool },
    /// An inline dropdown was opened or closed.
    Dropdown { label: String, open: bool },
}

impl Activation {
    /// The activation for a leaf entry, or `None` for a parent.
    pub fn from_leaf(entry: &MenuEntry) -> Option<Self> {
        if let Some(action) = &entry.action {
            return Some(match action {
                Action::OpenExternal { url } => Activation::OpenExternal(url.clone()),
                Action::SignOut => Activation::SignOut,
            });
        }
        entry.href.clone().map(Activation::Navigate)
    }
}
