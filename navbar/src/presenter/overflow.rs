use crate::catalog::Icon;
use crate::expansion::ExpansionState;
use crate::partition::OverflowEntry;

use super::Activation;

/// One visible line of the overflow surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowRow {
    pub label: String,
    pub icon: Option<Icon>,
    /// 0 for top-level rows, 1 for children of an expanded group.
    pub depth: u8,
    pub has_children: bool,
    pub expanded: bool,
    /// Index of the top-level entry this row belongs to.
    pub entry_index: usize,
    /// Index within the parent's children for depth-1 rows.
    pub child_index: Option<usize>,
}

/// State of the collapsible "more" surface.
#[derive(Debug, Clone, Default)]
pub struct OverflowMenu {
    pub open: bool,
    pub selected_index: usize,
    expansion: ExpansionState,
}

impl OverflowMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn open(&mut self) {
        self.open = true;
        self.selected_index = 0;
    }

    /// Close the surface and forget which groups were expanded.
    pub fn close(&mut self) {
        self.open = false;
        self.selected_index = 0;
        self.expansion.clear();
    }

    /// Flatten the overflow list into the rows currently visible.
    pub fn rows(&self, entries: &[OverflowEntry<'_>]) -> Vec<OverflowRow> {
        let mut rows = Vec::with_capacity(entries.len());
        for (entry_index, overflow_entry) in entries.iter().enumerate() {
            let entry = overflow_entry.entry();
            let expanded = entry.has_children() && self.expansion.is_expanded(&entry.label);
            rows.push(OverflowRow {
                label: entry.label.clone(),
                icon: entry.icon,
                depth: 0,
                has_children: entry.has_children(),
                expanded,
                entry_index,
                child_index: None,
            });
            if expanded {
                for (child_index, child) in entry.children.iter().enumerate() {
                    rows.push(OverflowRow {
                        label: child.label.clone(),
                        icon: child.icon,
                        depth: 1,
                        has_children: false,
                        expanded: false,
                        entry_index,
                        child_index: Some(child_index),
                    });
                }
            }
        }
        rows
    }

    /// Activate the row at `row_index`.
    ///
    /// A group row toggles its expansion and keeps the surface open. A leaf
    /// row closes the surface, clears all expansion and returns its target.
    pub fn activate(
        &mut self,
        entries: &[OverflowEntry<'_>],
        row_index: usize,
    ) -> Option<Activation> {
        let row = self.rows(entries).into_iter().nth(row_index)?;
        let entry = entries.get(row.entry_index)?.entry();

        if row.has_children {
            let expanded = self.expansion.toggle(&row.label);
            tracing::debug!(label = %row.label, expanded, "Toggled overflow group");
            self.clamp(entries);
            return Some(Activation::Toggled {
                label: row.label,
                expanded,
            });
        }

        let target = match row.child_index {
            Some(i) => entry.children.get(i)?,
            None => &*entry,
        };
        let activation = Activation::from_leaf(target);
        tracing::debug!(label = %row.label, ?activation, "Activated overflow entry");
        self.close();
        activation
    }

    pub fn activate_selected(&mut self, entries: &[OverflowEntry<'_>]) -> Option<Activation> {
        self.activate(entries, self.selected_index)
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self, entries: &[OverflowEntry<'_>]) {
        let rows = self.rows(entries).len();
        if self.selected_index < rows.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    /// Jump to the next top-level row, skipping children.
    pub fn next_group(&mut self, entries: &[OverflowEntry<'_>]) {
        let rows = self.rows(entries);
        if let Some(offset) = rows
            .iter()
            .skip(self.selected_index + 1)
            .position(|r| r.depth == 0)
        {
            self.selected_index += offset + 1;
        }
    }

    /// Jump to the previous top-level row, skipping children.
    pub fn prev_group(&mut self, entries: &[OverflowEntry<'_>]) {
        let rows = self.rows(entries);
        if let Some(index) = rows[..self.selected_index.min(rows.len())]
            .iter()
            .rposition(|r| r.depth == 0)
        {
            self.selected_index = index;
        }
    }

    /// Keep the cursor on a visible row after the row list shrank.
    pub fn clamp(&mut self, entries: &[OverflowEntry<'_>]) {
        let rows = self.rows(entries).len();
        self.selected_index = self.selected_index.min(rows.saturating_sub(1));
    }
}
