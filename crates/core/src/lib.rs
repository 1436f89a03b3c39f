//! Alt Store Core - Shared catalog types.
//!
//! This crate provides common types used across all Alt Store components:
//! - `catalog` - HTTP client for the remote product catalog
//! - `storefront` - Customer-facing browse controllers
//! - `admin` - Catalog administration controllers
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no async runtime. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, drafts, and newtype wrappers for IDs, prices,
//!   categories, and ratings
//! - [`collection`] - Keyed entity collections for local reconciliation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod collection;
pub mod types;

pub use collection::*;
pub use types::*;
