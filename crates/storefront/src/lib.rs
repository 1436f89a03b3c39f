//! Alt Store Storefront - Customer-facing page controllers.
//!
//! One controller per page, each owning the tri-state fetch lifecycle the
//! Presentation Layer renders from. Controllers fetch on mount, so a
//! freshly mounted page is always observably `Loading`; re-navigation
//! means a fresh mount and a fresh fetch. The Presentation Layer itself
//! (markup, routing) lives outside this workspace and consumes these
//! controllers through `state()`/`subscribe()`.
//!
//! # Pages
//!
//! - [`pages::HomePage`] - featured sample of the catalog
//! - [`pages::ProductsPage`] - the full catalog grid
//! - [`pages::ProductInfoPage`] - a single product's detail view
//! - [`chrome::NavChrome`] - navigation chrome state (hamburger menu plus
//!   the responsive breakpoint)

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod chrome;
pub mod pages;

pub use chrome::NavChrome;
pub use pages::{HomePage, ProductInfoPage, ProductsPage};
