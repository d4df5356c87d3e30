use std::collections::HashMap;

use crate::catalog::MenuEntry;

use super::Activation;

/// Open/closed state of one inline entry's dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    pub selected_index: usize,
}

/// State of the inline buttons. Each button with children owns its own
/// dropdown; opening or closing one never touches another.
#[derive(Debug, Clone, Default)]
pub struct InlineMenu {
    dropdowns: HashMap<String, DropdownState>,
}

impl InlineMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dropdown(&self, label: &str) -> DropdownState {
        self.dropdowns.get(label).copied().unwrap_or_default()
    }

    pub fn is_open(&self, label: &str) -> bool {
        self.dropdown(label).open
    }

    /// Click an inline button. Parents toggle their dropdown; leaves
    /// activate directly.
    pub fn click(&mut self, entry: &MenuEntry) -> Option<Activation> {
        if !entry.has_children() {
            return Activation::from_leaf(entry);
        }
        let dropdown = self.dropdowns.entry(entry.label.clone()).or_default();
        dropdown.open = !dropdown.open;
        dropdown.selected_index = 0;
        tracing::debug!(label = %entry.label, open = dropdown.open, "Toggled inline dropdown");
        Some(Activation::Dropdown {
            label: entry.label.clone(),
            open: dropdown.open,
        })
    }

    /// Pick a child from `entry`'s dropdown. Closes that dropdown only.
    pub fn select_child(&mut self, entry: &MenuEntry, index: usize) -> Option<Activation> {
        let child = entry.children.get(index)?;
        self.close(&entry.label);
        Activation::from_leaf(child)
    }

    pub fn select_current(&mut self, entry: &MenuEntry) -> Option<Activation> {
        let index = self.dropdown(&entry.label).selected_index;
        self.select_child(entry, index)
    }

    pub fn close(&mut self, label: &str) {
        if let Some(dropdown) = self.dropdowns.get_mut(label) {
            dropdown.open = false;
            dropdown.selected_index = 0;
        }
    }

    pub fn move_up(&mut self, label: &str) {
        if let Some(dropdown) = self.dropdowns.get_mut(label) {
            dropdown.selected_index = dropdown.selected_index.saturating_sub(1);
        }
    }

    pub fn move_down(&mut self, entry: &MenuEntry) {
        if let Some(dropdown) = self.dropdowns.get_mut(&entry.label) {
            if dropdown.selected_index < entry.children.len().saturating_sub(1) {
                dropdown.selected_index += 1;
            }
        }
    }

    /// Drop dropdown state for entries that are no longer inline.
    pub fn retain(&mut self, inline: &[&MenuEntry]) {
        self.dropdowns
            .retain(|label, _| inline.iter().any(|e| &e.label == label));
    }
}
