//! Alt Store Admin - Catalog administration controllers.
//!
//! The admin dashboard is the one page that owns an entity collection:
//! it fetches the full catalog once on mount and then applies writes to
//! its local copy optimistically after the remote acknowledges them. The
//! remote never durably persists writes, so the local collection is the
//! only place a created or edited product actually lives; that
//! divergence is a documented property of the backing service, not a
//! bug.
//!
//! # Modules
//!
//! - [`dashboard`] - the [`AdminDashboard`] controller (fetch lifecycle,
//!   optimistic mutations, write-outcome notices)
//! - [`form`] - [`ProductForm`], raw form input parsed into a validated
//!   draft

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dashboard;
pub mod form;

pub use dashboard::AdminDashboard;
pub use form::ProductForm;
