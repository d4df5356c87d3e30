//! Adaptive navigation bar core for the dojo training site.
//!
//! Everything in this crate is pure data and state transitions: the menu
//! catalog, the breakpoint table, the partitioner that decides which entries
//! stay inline and which move into the overflow surface, and the presenter
//! state machines that react to clicks. Rendering lives in `navbar-tui`.

pub mod auth;
pub mod breakpoints;
pub mod catalog;
pub mod error;
pub mod expansion;
pub mod layout;
pub mod meetings;
pub mod partition;
pub mod presenter;
pub mod request;

pub use auth::{has_created_profile, AuthStatus, IdentityProvider, LocalSession, User};
pub use breakpoints::{BreakpointSet, BreakpointSignals, CapacityTier, FixedWidth, ViewportQuery};
pub use catalog::{Action, Catalog, Icon, MenuEntry};
pub use error::{BreakpointError, CatalogError, LoadError};
pub use expansion::ExpansionState;
pub use layout::{resolve, ExtraSmallMenu, LayoutMode, Navbar, NavbarView};
pub use meetings::{meeting_count, AvailabilityStatus, Event, Participant};
pub use partition::{partition, AuxItem, OverflowEntry, Partition};
pub use presenter::{Activation, DropdownState, InlineMenu, OverflowMenu, OverflowRow};
pub use request::RequestState;
