//! The home page and its featured-products sample.

use alt_store_catalog::CatalogClient;
use alt_store_core::{EntityList, Product};
use alt_store_viewstate::{FetchController, FetchState};
use rand::Rng;
use rand::seq::IndexedRandom;
use tokio::sync::watch;
use tracing::error;

/// How many products the featured strip shows.
pub const FEATURED_COUNT: usize = 4;

/// Message shown when the featured strip cannot be loaded.
pub const LOAD_FAILURE: &str = "Failed to load featured products. Please try again later.";

/// Controller for the home page.
///
/// The payload is a random sample of [`FEATURED_COUNT`] distinct products
/// drawn from the catalog (fewer only when the catalog itself is
/// smaller). Each mount or refresh draws a fresh sample.
pub struct HomePage {
    client: CatalogClient,
    controller: FetchController<Vec<Product>>,
}

impl HomePage {
    /// Mount the page and start the initial fetch.
    ///
    /// Must be called within a tokio runtime. The returned controller is
    /// already `Loading`.
    #[must_use]
    pub fn mount(client: CatalogClient) -> Self {
        let page = Self {
            client,
            controller: FetchController::new(),
        };
        page.refresh();
        page
    }

    /// Re-fetch the catalog and draw a fresh sample. Does nothing while a
    /// fetch is already in flight.
    pub fn refresh(&self) {
        let client = self.client.clone();
        self.controller.spawn_load(async move {
            match client.list_products().await {
                Ok(products) => Ok(featured_sample(&mut rand::rng(), &products)),
                Err(e) => {
                    error!(error = %e, "featured catalog fetch failed");
                    Err(LOAD_FAILURE)
                }
            }
        });
    }

    /// Snapshot the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FetchState<Vec<Product>> {
        self.controller.state()
    }

    /// Subscribe to lifecycle transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<Product>>> {
        self.controller.subscribe()
    }
}

/// Draw an unordered sample of up to [`FEATURED_COUNT`] distinct products.
///
/// The catalog is keyed by id first (first occurrence wins), so a remote
/// payload that lists the same id twice cannot surface that product
/// twice in one sample. The source slice is left untouched; other
/// consumers of the same fetch see the catalog's original order.
fn featured_sample<R: Rng + ?Sized>(rng: &mut R, products: &[Product]) -> Vec<Product> {
    let catalog: EntityList<Product> = products.iter().cloned().collect();
    catalog
        .items()
        .choose_multiple(rng, FEATURED_COUNT)
        .cloned()
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use alt_store_core::{Category, Price, ProductId};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::new(Decimal::new(999, 2)),
            description: String::new(),
            image: String::new(),
            category: Category::Electronics,
            rating: None,
        }
    }

    fn catalog(n: i64) -> Vec<Product> {
        (1..=n).map(product).collect()
    }

    #[test]
    fn test_sample_is_four_distinct_ids_from_source() {
        let products = catalog(20);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let sample = featured_sample(&mut rng, &products);
            assert_eq!(sample.len(), FEATURED_COUNT);

            let ids: HashSet<ProductId> = sample.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), FEATURED_COUNT);
            for id in &ids {
                assert!(products.iter().any(|p| p.id == *id));
            }
        }
    }

    #[test]
    fn test_small_catalog_yields_whole_catalog() {
        let products = catalog(3);
        let mut rng = StdRng::seed_from_u64(7);
        let sample = featured_sample(&mut rng, &products);

        assert_eq!(sample.len(), 3);
        let ids: HashSet<ProductId> = sample.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_duplicate_ids_in_catalog_cannot_repeat_in_sample() {
        // A remote payload repeating an id collapses to one entry.
        let mut products = catalog(3);
        products.push(product(1));

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let sample = featured_sample(&mut rng, &products);
            assert_eq!(sample.len(), 3);
            let ids: HashSet<ProductId> = sample.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), 3, "sample repeats an id: {sample:?}");
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(featured_sample(&mut rng, &[]).is_empty());
    }

    #[test]
    fn test_source_order_is_untouched() {
        let products = catalog(10);
        let before: Vec<ProductId> = products.iter().map(|p| p.id).collect();

        let mut rng = StdRng::seed_from_u64(42);
        let _ = featured_sample(&mut rng, &products);

        let after: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(before, after);
    }
}
