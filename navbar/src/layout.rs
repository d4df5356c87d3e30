//! Top-level navbar state: auth status first, then the coarse layout switch,
//! then partitioning.

use crate::auth::{has_created_profile, AuthStatus};
use crate::breakpoints::{BreakpointSet, BreakpointSignals, ViewportQuery};
use crate::catalog::{Catalog, MenuEntry};
use crate::partition::{partition, AuxItem, OverflowEntry, Partition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Large,
    ExtraSmall,
}

/// The hamburger menu used below the large-layout breakpoint. Everything
/// lives in one overflow surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraSmallMenu<'a> {
    pub entries: Vec<OverflowEntry<'a>>,
}

impl<'a> ExtraSmallMenu<'a> {
    pub fn new(catalog: &'a Catalog, profile_created: bool) -> Self {
        let mut entries = Vec::with_capacity(catalog.len() + 4);
        if profile_created {
            entries.extend(catalog.entries().iter().map(OverflowEntry::Catalog));
        } else {
            entries.push(OverflowEntry::CreateProfile);
        }
        entries.push(OverflowEntry::Notifications);
        entries.push(OverflowEntry::Help);
        entries.push(OverflowEntry::SignOut);
        Self { entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarView<'a> {
    /// Auth state unknown yet: logo only.
    Loading,
    /// Signed out. Large layout shows the guest catalog inline, extra-small
    /// moves all of it into the overflow surface.
    Unauthenticated {
        layout: LayoutMode,
        entries: Vec<OverflowEntry<'a>>,
    },
    /// Signed in without a profile, large layout: profile, help and sign-out
    /// buttons only.
    ProfileSetup(Vec<MenuEntry>),
    ExtraSmall(ExtraSmallMenu<'a>),
    Full(Partition<'a>),
}

impl<'a> NavbarView<'a> {
    pub fn layout(&self) -> LayoutMode {
        match self {
            NavbarView::Unauthenticated { layout, .. } => *layout,
            NavbarView::ExtraSmall(_) => LayoutMode::ExtraSmall,
            _ => LayoutMode::Large,
        }
    }

    /// Entries rendered as standalone buttons.
    pub fn inline(&self) -> Vec<&MenuEntry> {
        match self {
            NavbarView::Full(p) => p.inline.clone(),
            NavbarView::ProfileSetup(entries) => entries.iter().collect(),
            NavbarView::Unauthenticated {
                layout: LayoutMode::Large,
                entries,
            } => entries
                .iter()
                .filter_map(|e| match e {
                    OverflowEntry::Catalog(entry) => Some(*entry),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Entries inside the overflow surface. Empty means no "more" button.
    pub fn overflow(&self) -> &[OverflowEntry<'a>] {
        match self {
            NavbarView::Full(p) => p.overflow.as_slice(),
            NavbarView::ExtraSmall(menu) => menu.entries.as_slice(),
            NavbarView::Unauthenticated {
                layout: LayoutMode::ExtraSmall,
                entries,
            } => entries.as_slice(),
            _ => &[],
        }
    }

    pub fn trailing(&self) -> &[AuxItem] {
        match self {
            NavbarView::Full(p) => p.trailing.as_slice(),
            _ => &[],
        }
    }
}

/// Owns the catalogs and breakpoint table and resolves the view for the
/// current auth status and viewport.
#[derive(Debug, Clone)]
pub struct Navbar {
    pub catalog: Catalog,
    pub guest_catalog: Catalog,
    pub breakpoints: BreakpointSet,
}

impl Default for Navbar {
    fn default() -> Self {
        Self {
            catalog: Catalog::dojo(),
            guest_catalog: Catalog::unauthenticated(),
            breakpoints: BreakpointSet::default(),
        }
    }
}

impl Navbar {
    pub fn new(catalog: Catalog, guest_catalog: Catalog, breakpoints: BreakpointSet) -> Self {
        Self {
            catalog,
            guest_catalog,
            breakpoints,
        }
    }

    pub fn view(&self, auth: &AuthStatus, signals: &BreakpointSignals) -> NavbarView<'_> {
        resolve(auth, self, signals)
    }

    pub fn view_for(&self, auth: &AuthStatus, viewport: &dyn ViewportQuery) -> NavbarView<'_> {
        let signals = BreakpointSignals::observe(&self.breakpoints, viewport);
        self.view(auth, &signals)
    }
}

/// Pick the navbar view. Auth status is evaluated first, then the large
/// versus extra-small switch; partitioning only runs for a signed-in user
/// with a profile on the large layout.
pub fn resolve<'a>(
    auth: &AuthStatus,
    navbar: &'a Navbar,
    signals: &BreakpointSignals,
) -> NavbarView<'a> {
    let layout = if signals.large_layout {
        LayoutMode::Large
    } else {
        LayoutMode::ExtraSmall
    };

    match auth {
        AuthStatus::Loading => NavbarView::Loading,
        AuthStatus::Unauthenticated => NavbarView::Unauthenticated {
            layout,
            entries: navbar
                .guest_catalog
                .entries()
                .iter()
                .map(OverflowEntry::Catalog)
                .collect(),
        },
        AuthStatus::Authenticated(user) => {
            let profile_created = has_created_profile(user);
            match (layout, profile_created) {
                (LayoutMode::ExtraSmall, _) => {
                    NavbarView::ExtraSmall(ExtraSmallMenu::new(&navbar.catalog, profile_created))
                }
                (LayoutMode::Large, false) => NavbarView::ProfileSetup(vec![
                    MenuEntry::create_profile(),
                    MenuEntry::help(),
                    MenuEntry::sign_out(),
                ]),
                (LayoutMode::Large, true) => NavbarView::Full(partition(
                    navbar.catalog.entries(),
                    &navbar.breakpoints,
                    signals,
                )),
            }
        }
    }
}
