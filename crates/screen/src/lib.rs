//! The two desk views.
//!
//! [`list::ListScreen`] is the management view's state engine: it owns the
//! visitor collection, the live filter and page window, and performs the
//! badge handoff. [`badge::BadgeScreen`] is the decoupled badge view that
//! reads a handed-off record back off the channel and triggers the one-shot
//! print. The only thing connecting them is the badge channel and the slug
//! in the route.

pub mod badge;
pub mod error;
pub mod list;

pub use badge::{BadgeScreen, BadgeState, Printer, PRINT_DELAY};
pub use error::{ScreenError, ScreenResult};
pub use list::{BadgeRoute, ListScreen};
