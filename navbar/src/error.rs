//! Error types for catalog and breakpoint configuration

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Menu entry at {path} has an empty label")]
    EmptyLabel { path: String },

    #[error("Duplicate label '{label}' under {parent}")]
    DuplicateLabel { label: String, parent: String },

    #[error("Menu entry '{label}' is nested deeper than two levels")]
    TooDeep { label: String },

    #[error("Menu entry '{label}' has no action, link or children")]
    Inert { label: String },

    #[error("Menu entry '{label}' mixes {count} of action, link and children")]
    Ambiguous { label: String, count: usize },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BreakpointError {
    #[error("No capacity tiers configured")]
    NoTiers,

    #[error("Capacity tier widths must strictly decrease: {previous}px is followed by {next}px")]
    WidthOrder { previous: u32, next: u32 },

    #[error("Hidden counts must not shrink for narrower tiers: {previous} is followed by {next}")]
    HiddenOrder { previous: usize, next: usize },

    #[error("Fallback hidden count {fallback} is smaller than the narrowest tier's {narrowest}")]
    Fallback { fallback: usize, narrowest: usize },
}

/// Failure while reading a catalog, breakpoint table or fixture from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid breakpoints: {0}")]
    Breakpoints(#[from] BreakpointError),
}

impl LoadError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
