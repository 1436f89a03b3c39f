//! Alt Store Catalog - Remote catalog client.
//!
//! A thin, typed client for the third-party product catalog API. It
//! translates CRUD intents into HTTP requests against the single remote
//! endpoint and normalizes responses and errors into the
//! [`CatalogError`] taxonomy; it holds no local cache and never retries.
//! Collection management is the page controllers' job.
//!
//! The remote endpoint is treated as a black box that does not durably
//! apply writes: acknowledgement payloads for create and update echo the
//! submitted fields but must not be trusted as persisted state.
//!
//! # Example
//!
//! ```rust,ignore
//! use alt_store_catalog::{CatalogClient, CatalogConfig};
//!
//! let config = CatalogConfig::from_env()?;
//! let client = CatalogClient::new(&config)?;
//!
//! let products = client.list_products().await?;
//! let first = client.get_product(products[0].id).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
mod error;

pub use client::CatalogClient;
pub use config::{CatalogConfig, ConfigError};
pub use error::{CatalogError, ErrorKind};
