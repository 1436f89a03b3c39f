//! Error taxonomy for catalog operations.

use alt_store_core::{DraftError, ProductId};
use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never completed (connect failure, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(StatusCode),

    /// The payload could not be parsed into the expected shape.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A success payload carried no entity for this ID.
    ///
    /// The remote reports unknown IDs as `200 OK` with a `null` body
    /// rather than a `404`; the client normalizes that here.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// The draft was rejected locally, before any request was sent.
    #[error("invalid draft: {0}")]
    Validation(#[from] DraftError),
}

/// The coarse classification page controllers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network unreachable, timeout, or non-2xx status.
    Transport,
    /// Malformed or unexpected payload shape, including a missing entity
    /// inside a success payload.
    Decode,
    /// Client-side rejection; no request was sent.
    Validation,
}

impl CatalogError {
    /// Classify this error into the coarse taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) | Self::Status(_) => ErrorKind::Transport,
            Self::Decode(_) | Self::NotFound(_) => ErrorKind::Decode,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }
}
