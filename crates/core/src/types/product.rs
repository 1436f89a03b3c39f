//! The catalog product entity.

use serde::{Deserialize, Serialize};

use crate::collection::Keyed;
use crate::types::{Category, Price, ProductDraft, ProductId, Rating};

/// A product as served by the remote catalog.
///
/// `description` and `image` default to empty strings when the remote
/// omits them; `rating` is absent on locally created products because
/// the remote never persists writes long enough to accumulate reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Materialize a draft into a full product under a locally chosen ID.
    ///
    /// Used when a create succeeds remotely: the remote's echoed ID is not
    /// durable, so the local collection assigns its own.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Self {
            id,
            title: draft.title,
            price: draft.price,
            description: draft.description,
            image: draft.image,
            category: draft.category,
            rating: None,
        }
    }

    /// Produce the product that results from applying `draft` to this one.
    ///
    /// The ID and rating survive; every draft field replaces its
    /// counterpart wholesale.
    #[must_use]
    pub fn with_draft(&self, draft: &ProductDraft) -> Self {
        Self {
            id: self.id,
            title: draft.title.clone(),
            price: draft.price,
            description: draft.description.clone(),
            image: draft.image.clone(),
            category: draft.category.clone(),
            rating: self.rating,
        }
    }
}

impl Keyed for Product {
    type Key = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Fjallraven Backpack",
                "price": 109.95,
                "description": "Fits 15 inch laptops",
                "category": "men's clothing",
                "image": "https://example.test/1.jpg",
                "rating": {"rate": 3.9, "count": 120}
            }"#,
        )
        .unwrap()
    }

    fn sample_draft() -> ProductDraft {
        ProductDraft {
            title: "Renamed Backpack".to_owned(),
            price: "99.00".parse().unwrap(),
            description: "Still fits laptops".to_owned(),
            image: "https://example.test/new.jpg".to_owned(),
            category: Category::Electronics,
        }
    }

    #[test]
    fn test_decodes_full_wire_shape() {
        let product = sample_product();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.category, Category::MensClothing);
        assert_eq!(product.price.to_string(), "$109.95");
        assert_eq!(product.rating.unwrap().count, 120);
    }

    #[test]
    fn test_missing_description_and_image_default_to_empty() {
        let product: Product = serde_json::from_str(
            r#"{"id": 7, "title": "Bare", "price": 5, "category": "electronics"}"#,
        )
        .unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.image, "");
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_from_draft_takes_local_id_and_no_rating() {
        let product = Product::from_draft(ProductId::new(42), sample_draft());
        assert_eq!(product.id, ProductId::new(42));
        assert_eq!(product.title, "Renamed Backpack");
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_with_draft_keeps_id_and_rating() {
        let original = sample_product();
        let updated = original.with_draft(&sample_draft());
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.rating, original.rating);
        assert_eq!(updated.title, "Renamed Backpack");
        assert_eq!(updated.category, Category::Electronics);
        assert_eq!(updated.price.to_string(), "$99.00");
    }

    #[test]
    fn test_rating_is_omitted_when_absent() {
        let product = Product::from_draft(ProductId::new(1), sample_draft());
        let json = serde_json::to_string(&product).unwrap();
        assert!(!json.contains("rating"));
    }
}
