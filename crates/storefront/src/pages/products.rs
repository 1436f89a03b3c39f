//! The full-catalog listing page.

use alt_store_catalog::CatalogClient;
use alt_store_core::{EntityList, Product};
use alt_store_viewstate::{FetchController, FetchState};
use tokio::sync::watch;
use tracing::error;

/// Message shown when the catalog cannot be loaded.
pub const LOAD_FAILURE: &str = "Failed to load products. Please try again later.";

/// Controller for the catalog listing page.
///
/// The payload is the full catalog in the order the remote listed it,
/// with duplicate ids dropped (first occurrence wins) so keyed rendering
/// downstream stays well-defined.
pub struct ProductsPage {
    client: CatalogClient,
    controller: FetchController<Vec<Product>>,
}

impl ProductsPage {
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

    /// Re-run the fetch. Does nothing while one is already in flight.
    pub fn refresh(&self) {
        let client = self.client.clone();
        self.controller.spawn_load(async move {
            match client.list_products().await {
                // Key the payload by id before publishing it.
                Ok(products) => Ok(EntityList::from_items(products).into_iter().collect()),
                Err(e) => {
                    error!(error = %e, "catalog list fetch failed");
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
