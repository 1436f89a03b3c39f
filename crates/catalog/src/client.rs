//! Remote catalog client implementation.
//!
//! Uses `reqwest` 0.13 against the catalog's JSON REST endpoints. Bodies
//! are read as text first so decode failures can be logged with the
//! offending payload.

use std::sync::Arc;

use alt_store_core::{Product, ProductDraft, ProductId};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::error::CatalogError;

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product catalog API.
///
/// Stateless apart from the connection pool: no caching, no retries, no
/// request queueing. Cheaply cloneable.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    /// Base URL with any trailing slash trimmed, ready for `format!`.
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        let base_url = config.base_url.as_str().trim_end_matches('/').to_owned();

        Ok(Self {
            inner: Arc::new(CatalogClientInner { client, base_url }),
        })
    }

    // =========================================================================
    // Read Operations
    // =========================================================================

    /// Fetch the full catalog, in the remote's order.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a
    /// payload that is not a product array.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = format!("{}/products", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let body = read_success_body(response).await?;
        parse_body(&body)
    }

    /// Fetch a single product by ID.
    ///
    /// The remote reports unknown IDs as a success with a `null` (or
    /// empty) body; that is normalized to [`CatalogError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, a
    /// missing entity, or a payload that is not a product.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let url = format!("{}/products/{id}", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        let body = read_success_body(response).await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            debug!("catalog returned an empty payload for this id");
            return Err(CatalogError::NotFound(id));
        }
        parse_body(&body)
    }

    // =========================================================================
    // Write Operations (acknowledgements are non-authoritative)
    // =========================================================================

    /// Submit a new product.
    ///
    /// The draft is validated locally first; an invalid draft is rejected
    /// without any request being sent. The returned product is the
    /// remote's acknowledgement echo and must be treated as advisory: the
    /// remote does not durably persist writes, and the echoed ID may
    /// never resolve again.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for an invalid draft, or a
    /// transport/decode error from the exchange.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, CatalogError> {
        draft.validate()?;

        let url = format!("{}/products", self.inner.base_url);
        let response = self.inner.client.post(&url).json(draft).send().await?;
        let body = read_success_body(response).await?;
        parse_body(&body)
    }

    /// Replace the product under `id` with the draft's fields.
    ///
    /// Full-replace semantics at the wire level; there is no partial
    /// merge. Validation and acknowledgement caveats match
    /// [`Self::create_product`].
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] for an invalid draft, or a
    /// transport/decode error from the exchange.
    #[instrument(skip(self, draft), fields(id = %id, title = %draft.title))]
    pub async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, CatalogError> {
        draft.validate()?;

        let url = format!("{}/products/{id}", self.inner.base_url);
        let response = self.inner.client.put(&url).json(draft).send().await?;
        let body = read_success_body(response).await?;
        parse_body(&body)
    }

    /// Delete the product under `id`.
    ///
    /// Idempotent from the caller's perspective: a remote `404`, or a
    /// success payload with no entity, yields `Ok(None)` rather than an
    /// error, so deleting twice cannot crash the caller.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, a non-success status other
    /// than `404`, or an unparseable payload.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let url = format!("{}/products/{id}", self.inner.base_url);
        let response = self.inner.client.delete(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("delete target already absent");
            return Ok(None);
        }
        let body = read_success_body(response).await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            debug!("delete acknowledged without an entity");
            return Ok(None);
        }
        parse_body(&body).map(Some)
    }
}

// =============================================================================
// Response Handling
// =============================================================================

/// Check the status and read the response body as text.
async fn read_success_body(response: reqwest::Response) -> Result<String, CatalogError> {
    let status = response.status();

    // Get response body as text first for better error diagnostics
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %body.chars().take(500).collect::<String>(),
            "catalog API returned non-success status"
        );
        return Err(CatalogError::Status(status));
    }
    Ok(body)
}

/// Parse a response body, logging the payload on failure.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %body.chars().take(500).collect::<String>(),
            "failed to parse catalog response"
        );
        CatalogError::Decode(e)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = CatalogConfig::for_endpoint("http://127.0.0.1:9099/".parse().unwrap());
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.inner.base_url, "http://127.0.0.1:9099");
    }

    #[test]
    fn test_parse_body_product_list() {
        let products: Vec<Product> = parse_body(
            r#"[{"id": 1, "title": "A", "price": 9.99, "description": "x",
                 "category": "electronics", "image": ""}]"#,
        )
        .unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, ProductId::new(1));
    }

    #[test]
    fn test_parse_body_rejects_wrong_shape() {
        let result: Result<Vec<Product>, _> = parse_body(r#"{"error": "nope"}"#);
        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }
}
