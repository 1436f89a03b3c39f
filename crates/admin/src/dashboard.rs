//! The admin dashboard controller.
//!
//! Owns the product collection and the optimistic-mutation contract: a
//! write is sent to the remote first, and only an acknowledged write
//! touches the local collection. Failed writes leave the collection and
//! the page lifecycle untouched and raise a transient error notice
//! instead.

use alt_store_catalog::{CatalogClient, CatalogError};
use alt_store_core::{EntityList, Product, ProductDraft, ProductId};
use alt_store_viewstate::{FetchController, FetchState, Notice, NoticeBoard};
use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error};

/// Message shown when the product list cannot be loaded.
pub const LOAD_FAILURE: &str = "Failed to load products. Please try again later.";

/// Banner text for any acknowledged write.
pub const WRITE_SUCCESS: &str = "Operation completed successfully!";

/// Banner text when a create is rejected or fails remotely.
pub const CREATE_FAILURE: &str = "Failed to add product. Please try again.";

/// Banner text when an update is rejected or fails remotely.
pub const UPDATE_FAILURE: &str = "Failed to update product. Please try again.";

/// Banner text when a delete fails remotely.
pub const DELETE_FAILURE: &str = "Failed to delete product. Please try again.";

/// Controller for the admin dashboard page.
///
/// The fetch lifecycle covers the initial list load only. Writes never
/// regress it: once the page is `Ready`, a failed create, update, or
/// delete keeps the last-known-good collection on screen and posts to
/// the notice board, which clears itself after three seconds.
pub struct AdminDashboard {
    client: CatalogClient,
    controller: FetchController<EntityList<Product>>,
    notices: NoticeBoard,
}

impl AdminDashboard {
    /// Mount the dashboard and start the initial catalog fetch.
    ///
    /// Must be called within a tokio runtime. The returned controller is
    /// already `Loading`.
    #[must_use]
    pub fn mount(client: CatalogClient) -> Self {
        let dashboard = Self {
            client,
            controller: FetchController::new(),
            notices: NoticeBoard::new(),
        };
        dashboard.refresh();
        dashboard
    }

    /// Re-fetch the catalog, replacing the collection wholesale. Does
    /// nothing while a fetch is already in flight.
    ///
    /// Local-only entities (created through [`Self::submit_create`]) do
    /// not survive a refresh; the remote never persisted them.
    pub fn refresh(&self) {
        let client = self.client.clone();
        self.controller.spawn_load(async move {
            match client.list_products().await {
                Ok(products) => Ok(EntityList::from_items(products)),
                Err(e) => {
                    error!(error = %e, "admin catalog fetch failed");
                    Err(LOAD_FAILURE)
                }
            }
        });
    }

    /// Snapshot the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> FetchState<EntityList<Product>> {
        self.controller.state()
    }

    /// Subscribe to lifecycle transitions.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState<EntityList<Product>>> {
        self.controller.subscribe()
    }

    /// Snapshot the current collection; empty unless the page is `Ready`.
    #[must_use]
    pub fn products(&self) -> EntityList<Product> {
        match self.state() {
            FetchState::Ready(list) => list,
            FetchState::Loading | FetchState::Failed(_) => EntityList::new(),
        }
    }

    /// The write-outcome notice board for this page.
    #[must_use]
    pub const fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    /// Create a product remotely and, on acknowledgement, append it to
    /// the collection under a locally synthesized ID.
    ///
    /// The remote's echoed ID is never trusted (the backing service
    /// echoes a constant and discards the write), so the appended entity
    /// carries a fresh local ID and is advisory: it exists only in this
    /// collection and will not survive a [`Self::refresh`]. Returns the
    /// appended entity, or `Ok(None)` in the degenerate case where the
    /// write was acknowledged before the initial load settled and there
    /// is no collection to extend.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for an invalid draft (no
    /// request is sent), or the transport/decode error from the
    /// exchange. Either way an error notice is posted and the collection
    /// is untouched.
    pub async fn submit_create(
        &self,
        draft: ProductDraft,
    ) -> Result<Option<Product>, CatalogError> {
        match self.client.create_product(&draft).await {
            Ok(ack) => {
                debug!(echoed_id = %ack.id, "create acknowledged; echoed id ignored");
                let mut appended = None;
                self.controller.mutate(|list| {
                    let product = Product::from_draft(next_local_id(list), draft);
                    appended = Some(product.clone());
                    list.push(product);
                });
                self.notices.post(Notice::success(WRITE_SUCCESS));
                Ok(appended)
            }
            Err(e) => Err(self.write_failed("create", e, CREATE_FAILURE)),
        }
    }

    /// Update a product remotely and, on acknowledgement, apply the
    /// draft over the matching collection entry in place.
    ///
    /// The entry keeps its ID and rating; every draft field replaces its
    /// counterpart wholesale, mirroring the full-replace wire semantics.
    /// An ID with no matching entry leaves the collection unchanged (the
    /// remote accepts updates for IDs it has never served).
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::submit_create`].
    pub async fn submit_update(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<(), CatalogError> {
        match self.client.update_product(id, &draft).await {
            Ok(_) => {
                self.controller.mutate(|list| {
                    list.update(id, |old| old.with_draft(&draft));
                });
                self.notices.post(Notice::success(WRITE_SUCCESS));
                Ok(())
            }
            Err(e) => Err(self.write_failed("update", e, UPDATE_FAILURE)),
        }
    }

    /// Delete a product remotely and, on acknowledgement, remove the
    /// matching collection entry.
    ///
    /// Idempotent end to end: the client normalizes a remote `404` to
    /// success, and removing an ID that is already absent is a silent
    /// no-op, so deleting the same product twice raises no error state.
    ///
    /// # Errors
    ///
    /// Returns the transport/decode error from the exchange; an error
    /// notice is posted and the collection is untouched.
    pub async fn submit_delete(&self, id: ProductId) -> Result<(), CatalogError> {
        match self.client.delete_product(id).await {
            Ok(_) => {
                self.controller.mutate(|list| {
                    list.remove(id);
                });
                self.notices.post(Notice::success(WRITE_SUCCESS));
                Ok(())
            }
            Err(e) => Err(self.write_failed("delete", e, DELETE_FAILURE)),
        }
    }

    fn write_failed(&self, operation: &str, error: CatalogError, banner: &str) -> CatalogError {
        error!(error = %error, operation, "catalog write failed");
        self.notices.post(Notice::error(banner));
        error
    }
}

/// Mint an ID for a locally created product.
///
/// Starts from the current epoch milliseconds (matching how the original
/// UI labeled never-persisted creations) and bumps past the collection's
/// largest existing key so keys stay unique locally. Collision with a
/// future real remote ID is accepted: remote writes are non-durable, so
/// the two can never meet in one collection.
fn next_local_id(list: &EntityList<Product>) -> ProductId {
    let candidate = ProductId::new(Utc::now().timestamp_millis());
    match list.max_key() {
        Some(max) if max >= candidate => ProductId::new(max.as_i64() + 1),
        _ => candidate,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alt_store_core::{Category, Price};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::new(Decimal::new(500, 2)),
            description: "d".to_owned(),
            image: String::new(),
            category: Category::Jewelery,
            rating: None,
        }
    }

    #[test]
    fn test_local_id_is_epoch_scale_on_empty_collection() {
        let id = next_local_id(&EntityList::new());
        // Any plausible test run happens after 2020 in epoch millis.
        assert!(id.as_i64() > 1_577_000_000_000);
    }

    #[test]
    fn test_local_id_clears_remote_scale_keys() {
        let list = EntityList::from_items(vec![product(1), product(20)]);
        let id = next_local_id(&list);
        assert!(!list.contains(id));
        assert!(id > ProductId::new(20));
    }

    #[test]
    fn test_local_id_bumps_past_a_prior_synthesized_key() {
        let future_key = Utc::now().timestamp_millis() + 60_000;
        let list = EntityList::from_items(vec![product(future_key)]);
        assert_eq!(next_local_id(&list), ProductId::new(future_key + 1));
    }
}
