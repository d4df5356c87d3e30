use navbar::ViewportQuery;

/// Viewport width derived from the terminal's column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalViewport {
    pub columns: u16,
    pub px_per_column: u32,
    /// Overrides the terminal-derived width when set.
    pub fixed_px: Option<u32>,
}

impl TerminalViewport {
    pub fn new(columns: u16, px_per_column: u32) -> Self {
        Self {
            columns,
            px_per_column,
            fixed_px: None,
        }
    }

    pub fn fixed(px: u32) -> Self {
        Self {
            columns: 0,
            px_per_column: 0,
            fixed_px: Some(px),
        }
    }

    pub fn width_px(&self) -> u32 {
        self.fixed_px
            .unwrap_or_else(|| u32::from(self.columns).saturating_mul(self.px_per_column))
    }
}

impl ViewportQuery for TerminalViewport {
    fn min_width(&self, px: u32) -> bool {
        self.width_px() >= px
    }
}
