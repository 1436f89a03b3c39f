//! The admin product form.
//!
//! Holds the fields exactly as typed and defers all judgment to
//! [`ProductForm::parse`]: the price text must parse as a decimal, and
//! the assembled draft must pass [`ProductDraft::validate`]. The same
//! form backs both the create flow (blank) and the edit flow
//! ([`ProductForm::from_product`]).

use alt_store_core::{Category, DraftError, Price, Product, ProductDraft};

/// Raw admin form input, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl ProductForm {
    /// Prefill the form from an existing product, for the edit flow.
    ///
    /// The price is rendered without currency formatting so it parses
    /// back unchanged.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.amount().to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.as_str().to_owned(),
        }
    }

    /// Parse the raw fields into a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::InvalidPrice`] when the price text is not a
    /// decimal number, or the first failure from
    /// [`ProductDraft::validate`] otherwise. No draft leaves this method
    /// unvalidated.
    pub fn parse(&self) -> Result<ProductDraft, DraftError> {
        let price: Price = self
            .price
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;

        let draft = ProductDraft {
            title: self.title.clone(),
            price,
            description: self.description.clone(),
            image: self.image.clone(),
            category: Category::from(self.category.clone()),
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Blank every field, as after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
