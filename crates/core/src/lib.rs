//! Domain model and pure view logic for the registration badge desk.
//!
//! This crate has zero internal dependencies so the store client, the badge
//! channel, the screens, and the CLI can all share it.

pub mod badge;
pub mod error;
pub mod hall;
pub mod listview;
pub mod palette;
pub mod slug;
pub mod types;
pub mod visitor;
