//! The single-product detail page.

use alt_store_catalog::{CatalogClient, CatalogError};
use alt_store_core::{Product, ProductId};
use alt_store_viewstate::{FetchController, FetchState};
use tokio::sync::watch;
use tracing::error;

/// Message shown when the requested product does not exist.
pub const NOT_FOUND: &str = "Product not found";

/// Message shown when the detail fetch fails for any other reason.
pub const LOAD_FAILURE: &str = "Failed to load product details. Please try again later.";

/// Controller for one product's detail page.
///
/// A controller is bound to the ID it was mounted with; navigating to a
/// different product means a fresh mount.
pub struct ProductInfoPage {
    client: CatalogClient,
    id: ProductId,
    controller: FetchController<Product>,
}

impl ProductInfoPage {
    /// Mount the page for `id` and start the initial fetch.
    ///
    /// Must be called within a tokio runtime. The returned controller is
    /// already `Loading`.
    #[must_use]
    pub fn mount(client: CatalogClient, id: ProductId) -> Self {
        let page = Self {
            client,
            id,
            controller: FetchController::new(),
        };
        page.refresh();
        page
    }

    /// The product ID this page is bound to.
    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Re-run the fetch. Does nothing while one is already in flight.
    pub fn refresh(&self) {
        let client = self.client.clone();
        let id = self.id;
        self.controller.spawn_load(async move {
            client.get_product(id).await.map_err(|e| {
                error!(error = %e, "product detail fetch failed");
                failure_message(&e)
            })
        });
    }

    /// Snapshot the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FetchState<Product> {
        self.controller.state()
    }

    /// Subscribe to lifecycle transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Product>> {
        self.controller.subscribe()
    }
}

/// Map a client error to the page's user-facing copy.
const fn failure_message(error: &CatalogError) -> &'static str {
    match error {
        CatalogError::NotFound(_) => NOT_FOUND,
        _ => LOAD_FAILURE,
    }
}
