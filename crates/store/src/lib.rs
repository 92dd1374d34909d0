//! Typed client for the remote registrant store.
//!
//! The registrant store is the collaborator service that owns visitor and
//! hall records. It speaks a flat JSON dialect over five endpoints
//! (`GET/POST /visitors`, `PUT/DELETE /visitors/{id}`, `GET /halls`);
//! [`wire`] owns the translation between that dialect and the domain model,
//! and [`client::HttpVisitorStore`] implements the [`VisitorStore`] trait
//! over HTTP. Screens depend only on the trait, so tests drive them with an
//! in-memory fake instead of a live server.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{HttpVisitorStore, VisitorStore};
pub use error::StoreError;
