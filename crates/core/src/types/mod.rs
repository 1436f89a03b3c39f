//! Core types for Alt Store.
//!
//! This module provides type-safe wrappers for common catalog concepts.

pub mod category;
pub mod draft;
pub mod id;
pub mod price;
pub mod product;
pub mod rating;

pub use category::Category;
pub use draft::{DraftError, ProductDraft};
pub use id::*;
pub use price::Price;
pub use product::Product;
pub use rating::Rating;
