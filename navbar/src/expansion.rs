use std::collections::HashMap;

/// Which top-level overflow entries currently show their children.
///
/// Lives as long as the overflow surface that owns it; absent labels read as
/// collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    open: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.open.get(label).copied().unwrap_or(false)
    }

    /// Flip one label, leaving every other flag untouched. Returns the new value.
    pub fn toggle(&mut self, label: &str) -> bool {
        let flag = self.open.entry(label.to_string()).or_insert(false);
        *flag = !*flag;
        *flag
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// True when nothing has been toggled since the last clear.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_target() {
        let mut state = ExpansionState::new();
        state.toggle("Shop");
        assert!(state.toggle("Material"));
        assert!(state.is_expanded("Shop"));
        assert!(state.is_expanded("Material"));

        assert!(!state.toggle("Material"));
        assert!(!state.is_expanded("Material"));
        assert!(state.is_expanded("Shop"));
    }

    #[test]
    fn test_clear() {
        let mut state = ExpansionState::new();
        state.toggle("Scoreboard");
        state.clear();
        assert!(state.is_empty());
        assert!(!state.is_expanded("Scoreboard"));
    }
}
