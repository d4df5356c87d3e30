//! Viewport breakpoints and the capability that observes them.
//!
//! The breakpoint table is a fixed lookup, not derived from item widths:
//! adding or removing catalog entries shifts which entries each tier hides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BreakpointError, LoadError};

/// One capacity step: at `min_width` pixels or wider, hide `hidden` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityTier {
    pub min_width: u32,
    pub hidden: usize,
}

impl CapacityTier {
    pub const fn new(min_width: u32, hidden: usize) -> Self {
        Self { min_width, hidden }
    }
}

/// Every threshold the navbar reacts to, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointSet {
    /// Capacity tiers ordered widest first.
    pub capacity: Vec<CapacityTier>,
    /// Hidden count when no capacity tier is satisfied.
    pub fallback_hidden: usize,
    pub help: u32,
    pub notifications: u32,
    pub profile: u32,
    /// Below this width the extra-small hamburger layout replaces everything.
    pub large_layout: u32,
}

impl Default for BreakpointSet {
    fn default() -> Self {
        Self {
            capacity: vec![
                CapacityTier::new(1560, 0),
                CapacityTier::new(1416, 2),
                CapacityTier::new(1315, 3),
                CapacityTier::new(1196, 4),
                CapacityTier::new(1066, 5),
                CapacityTier::new(963, 6),
                CapacityTier::new(772, 7),
            ],
            fallback_hidden: 8,
            help: 624,
            notifications: 567,
            profile: 542,
            large_layout: 450,
        }
    }
}

impl BreakpointSet {
    /// Check that a wider viewport can never hide more entries than a
    /// narrower one.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        let narrowest = self.capacity.last().ok_or(BreakpointError::NoTiers)?;

        for pair in self.capacity.windows(2) {
            let (wider, narrower) = (pair[0], pair[1]);
            if narrower.min_width >= wider.min_width {
                return Err(BreakpointError::WidthOrder {
                    previous: wider.min_width,
                    next: narrower.min_width,
                });
            }
            if narrower.hidden < wider.hidden {
                return Err(BreakpointError::HiddenOrder {
                    previous: wider.hidden,
                    next: narrower.hidden,
                });
            }
        }

        if self.fallback_hidden < narrowest.hidden {
            return Err(BreakpointError::Fallback {
                fallback: self.fallback_hidden,
                narrowest: narrowest.hidden,
            });
        }
        Ok(())
    }

    /// Hidden count for the current signals: the first satisfied tier,
    /// scanning from the widest, or the fallback.
    pub fn hidden_count(&self, signals: &BreakpointSignals) -> usize {
        self.capacity
            .iter()
            .zip(&signals.capacity)
            .find(|(_, satisfied)| **satisfied)
            .map(|(tier, _)| tier.hidden)
            .unwrap_or(self.fallback_hidden)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let set: BreakpointSet = serde_json::from_str(json)?;
        set.validate()?;
        Ok(set)
    }

    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let set = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), tiers = set.capacity.len(), "Loaded breakpoints");
        Ok(set)
    }
}

/// Reports whether the viewport is at least a given width.
///
/// Supplied by the environment (terminal size, browser media query); tests
/// use [`FixedWidth`] or build [`BreakpointSignals`] directly.
pub trait ViewportQuery {
    fn min_width(&self, px: u32) -> bool;
}

/// A viewport of known, constant width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWidth(pub u32);

impl ViewportQuery for FixedWidth {
    fn min_width(&self, px: u32) -> bool {
        self.0 >= px
    }
}

/// A snapshot of every breakpoint as a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BreakpointSignals {
    /// One flag per capacity tier, same order as [`BreakpointSet::capacity`].
    pub capacity: Vec<bool>,
    pub help: bool,
    pub notifications: bool,
    pub profile: bool,
    pub large_layout: bool,
}

impl BreakpointSignals {
    pub fn observe(set: &BreakpointSet, viewport: &dyn ViewportQuery) -> Self {
        Self {
            capacity: set
                .capacity
                .iter()
                .map(|tier| viewport.min_width(tier.min_width))
                .collect(),
            help: viewport.min_width(set.help),
            notifications: viewport.min_width(set.notifications),
            profile: viewport.min_width(set.profile),
            large_layout: viewport.min_width(set.large_layout),
        }
    }

    /// Every signal set to `satisfied`, with `tiers` capacity flags.
    pub fn uniform(tiers: usize, satisfied: bool) -> Self {
        Self {
            capacity: vec![satisfied; tiers],
            help: satisfied,
            notifications: satisfied,
            profile: satisfied,
            large_layout: satisfied,
        }
    }
}
