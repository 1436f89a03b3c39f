//! Product drafts: the writable subset of a product.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Category, Price};

/// Errors from validating or assembling a [`ProductDraft`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The title is missing or blank.
    #[error("title is required")]
    EmptyTitle,

    /// The price text could not be parsed as a decimal number.
    #[error("price is not a valid number: {0:?}")]
    InvalidPrice(String),

    /// The price parsed but is below zero.
    #[error("price must not be negative")]
    NegativePrice,

    /// The description is missing or blank.
    #[error("description is required")]
    EmptyDescription,

    /// The category is missing or blank.
    #[error("category is required")]
    EmptyCategory,

    /// The category is not one of the catalog's known categories.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),
}

/// The fields a caller supplies when creating or updating a product.
///
/// Identity and rating are deliberately absent: the ID is assigned by the
/// collection on create and preserved on update, and ratings only ever
/// come from the remote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: Price,
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: Category,
}

impl ProductDraft {
    /// Check the draft against the catalog's write requirements.
    ///
    /// Title and description must be non-blank, the price must not be
    /// negative, and the category must be one of [`Category::KNOWN`].
    /// The image URL is optional. Checks run in field order and the
    /// first failure wins.
    ///
    /// The remote itself serves products outside the known category set
    /// ([`Category::Other`] tolerates them on decode), but writes
    /// originate from this client's own form, which only offers the
    /// known set.
    ///
    /// # Errors
    ///
    /// Returns the first applicable [`DraftError`].
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.price.is_negative() {
            return Err(DraftError::NegativePrice);
        }
        if self.description.trim().is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        if self.category.as_str().trim().is_empty() {
            return Err(DraftError::EmptyCategory);
        }
        if let Category::Other(name) = &self.category {
            return Err(DraftError::UnknownCategory(name.clone()));
        }
        Ok(())
    }
}
