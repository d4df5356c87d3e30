//! Splits the catalog into inline, overflow and trailing lists.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::breakpoints::{BreakpointSet, BreakpointSignals};
use crate::catalog::MenuEntry;

/// A row in the overflow surface: either a catalog entry or one of the
/// auxiliary affordances pushed there for lack of space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverflowEntry<'a> {
    Catalog(&'a MenuEntry),
    Notifications,
    Help,
    SignOut,
    CreateProfile,
}

impl<'a> OverflowEntry<'a> {
    pub fn entry(&self) -> Cow<'a, MenuEntry> {
        match self {
            OverflowEntry::Catalog(entry) => Cow::Borrowed(*entry),
            OverflowEntry::Notifications => Cow::Owned(MenuEntry::notifications()),
            OverflowEntry::Help => Cow::Owned(MenuEntry::help()),
            OverflowEntry::SignOut => Cow::Owned(MenuEntry::sign_out()),
            OverflowEntry::CreateProfile => Cow::Owned(MenuEntry::create_profile()),
        }
    }

    pub fn is_catalog(&self) -> bool {
        matches!(self, OverflowEntry::Catalog(_))
    }
}

/// Fixed end-of-bar affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxItem {
    Help,
    Profile,
}

impl AuxItem {
    pub fn entry(self) -> MenuEntry {
        match self {
            AuxItem::Help => MenuEntry::help(),
            AuxItem::Profile => MenuEntry::profile_menu(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<'a> {
    pub hidden_count: usize,
    pub inline: Vec<&'a MenuEntry>,
    pub overflow: Vec<OverflowEntry<'a>>,
    pub trailing: SmallVec<[AuxItem; 2]>,
}

impl<'a> Partition<'a> {
    /// Catalog entries that landed in the overflow surface, in order.
    pub fn overflow_candidates(&self) -> impl Iterator<Item = &'a MenuEntry> + '_ {
        self.overflow.iter().filter_map(|e| match e {
            OverflowEntry::Catalog(entry) => Some(*entry),
            _ => None,
        })
    }
}

/// Partition `catalog` for the given breakpoint signals.
///
/// Total over its inputs: any catalog size and any combination of signals
/// yields a partition, with `inline_count` clamped at zero.
pub fn partition<'a>(
    catalog: &'a [MenuEntry],
    breakpoints: &BreakpointSet,
    signals: &BreakpointSignals,
) -> Partition<'a> {
    let hidden_count = breakpoints.hidden_count(signals);
    let inline_count = catalog.len().saturating_sub(hidden_count);
    let (shown, hidden) = catalog.split_at(inline_count);

    let mut overflow: Vec<OverflowEntry<'a>> =
        hidden.iter().map(OverflowEntry::Catalog).collect();
    let mut trailing = SmallVec::new();

    if !signals.notifications {
        overflow.push(OverflowEntry::Notifications);
    }

    if signals.help {
        trailing.push(AuxItem::Help);
    } else {
        overflow.push(OverflowEntry::Help);
    }

    if signals.profile {
        trailing.push(AuxItem::Profile);
    } else {
        overflow.push(OverflowEntry::SignOut);
    }

    tracing::trace!(
        hidden_count,
        inline = inline_count,
        overflow = overflow.len(),
        "Partitioned navbar"
    );

    Partition {
        hidden_count,
        inline: shown.iter().collect(),
        overflow,
        trailing,
    }
}
