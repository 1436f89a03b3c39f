//! Test support for the Alt Store end-to-end suite.
//!
//! [`StubCatalog`] is an in-process stand-in for the remote catalog
//! endpoint, faithful to its observed quirks:
//!
//! - unknown IDs on `GET /products/{id}` answer `200 OK` with a `null`
//!   body rather than a `404`,
//! - `POST /products` echoes the submitted fields under a constant ID
//!   and discards the write,
//! - no write mutates the served catalog at all (the real service does
//!   not durably persist writes either),
//! - `DELETE /products/{id}` echoes the deleted entity, or answers
//!   `404` for an ID it has never served.
//!
//! Every route counts its hits, so tests can assert that client-side
//! validation rejected a draft without any request being sent. A
//! failure toggle makes every route answer a fixed error status until
//! healed.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use alt_store_catalog::{CatalogClient, CatalogConfig};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use serde_json::{Value, json};
use url::Url;

/// The constant ID the stub (like the real service) echoes on create.
pub const ECHO_ID: i64 = 21;

/// Install a fmt subscriber once for the whole test binary.
///
/// Controlled by `RUST_LOG`; silent by default.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Per-route request counts observed by the stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteHits {
    pub list: usize,
    pub get: usize,
    pub create: usize,
    pub update: usize,
    pub delete: usize,
}

struct StubState {
    products: Mutex<Vec<Value>>,
    failure: Mutex<Option<StatusCode>>,
    list_hits: AtomicUsize,
    get_hits: AtomicUsize,
    create_hits: AtomicUsize,
    update_hits: AtomicUsize,
    delete_hits: AtomicUsize,
}

impl StubState {
    fn failure(&self) -> Option<StatusCode> {
        *self.failure.lock().expect("failure lock poisoned")
    }

    fn catalog(&self) -> Vec<Value> {
        self.products.lock().expect("products lock poisoned").clone()
    }
}

/// An in-process stand-in for the remote catalog endpoint.
pub struct StubCatalog {
    base_url: Url,
    state: Arc<StubState>,
}

impl StubCatalog {
    /// Start a stub serving `products`, bound to an ephemeral local port.
    ///
    /// The serve task runs until the test runtime shuts down.
    pub async fn start(products: Vec<Value>) -> Self {
        init_tracing();

        let state = Arc::new(StubState {
            products: Mutex::new(products),
            failure: Mutex::new(None),
            list_hits: AtomicUsize::new(0),
            get_hits: AtomicUsize::new(0),
            create_hits: AtomicUsize::new(0),
            update_hits: AtomicUsize::new(0),
            delete_hits: AtomicUsize::new(0),
        });

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(get_product).put(update_product).delete(delete_product),
            )
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr: SocketAddr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let base_url = format!("http://{addr}").parse().expect("stub base url");
        Self { base_url, state }
    }

    /// Where the stub is listening.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// A catalog client pointed at this stub.
    #[must_use]
    pub fn client(&self) -> CatalogClient {
        let config = CatalogConfig::for_endpoint(self.base_url.clone());
        CatalogClient::new(&config).expect("build catalog client")
    }

    /// Make every route answer `status` until [`Self::heal`] is called.
    pub fn fail_with(&self, status: StatusCode) {
        *self.state.failure.lock().expect("failure lock poisoned") = Some(status);
    }

    /// Resume normal responses.
    pub fn heal(&self) {
        *self.state.failure.lock().expect("failure lock poisoned") = None;
    }

    /// Snapshot the per-route request counts.
    #[must_use]
    pub fn hits(&self) -> RouteHits {
        RouteHits {
            list: self.state.list_hits.load(Ordering::Relaxed),
            get: self.state.get_hits.load(Ordering::Relaxed),
            create: self.state.create_hits.load(Ordering::Relaxed),
            update: self.state.update_hits.load(Ordering::Relaxed),
            delete: self.state.delete_hits.load(Ordering::Relaxed),
        }
    }
}

/// A product in the remote's wire shape.
#[must_use]
pub fn wire_product(id: i64, title: &str, price: f64, category: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "price": price,
        "description": format!("{title}, as described"),
        "category": category,
        "image": format!("https://img.example.test/{id}.jpg"),
    })
}

/// A six-product catalog spanning every known category, one rated.
#[must_use]
pub fn seeded_catalog() -> Vec<Value> {
    let mut rated = wire_product(1, "Fjallraven Backpack", 109.95, "men's clothing");
    rated["rating"] = json!({"rate": 3.9, "count": 120});
    vec![
        rated,
        wire_product(2, "Slim Fit T-Shirt", 22.3, "men's clothing"),
        wire_product(3, "Silver Dragon Bracelet", 695.0, "jewelery"),
        wire_product(4, "Portable SSD 1TB", 109.0, "electronics"),
        wire_product(5, "Rain Jacket Windbreaker", 39.99, "women's clothing"),
        wire_product(6, "Solid Gold Petite Micropave", 168.0, "jewelery"),
    ]
}

fn find_product(catalog: &[Value], id: i64) -> Option<Value> {
    catalog
        .iter()
        .find(|p| p.get("id").and_then(Value::as_i64) == Some(id))
        .cloned()
}

const fn failure_response(status: StatusCode) -> (StatusCode, &'static str) {
    (status, "stub failure")
}

async fn list_products(State(state): State<Arc<StubState>>) -> Response {
    state.list_hits.fetch_add(1, Ordering::Relaxed);
    if let Some(status) = state.failure() {
        return failure_response(status).into_response();
    }
    Json(Value::Array(state.catalog())).into_response()
}

async fn get_product(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    state.get_hits.fetch_add(1, Ordering::Relaxed);
    if let Some(status) = state.failure() {
        return failure_response(status).into_response();
    }
    // Unknown ids are 200-with-null, like the real service.
    Json(find_product(&state.catalog(), id).unwrap_or(Value::Null)).into_response()
}

async fn create_product(
    State(state): State<Arc<StubState>>,
    Json(mut body): Json<Value>,
) -> Response {
    state.create_hits.fetch_add(1, Ordering::Relaxed);
    if let Some(status) = state.failure() {
        return failure_response(status).into_response();
    }
    // Acknowledge without persisting; the echoed id is a constant.
    body["id"] = json!(ECHO_ID);
    Json(body).into_response()
}

async fn update_product(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
    Json(mut body): Json<Value>,
) -> Response {
    state.update_hits.fetch_add(1, Ordering::Relaxed);
    if let Some(status) = state.failure() {
        return failure_response(status).into_response();
    }
    // Acknowledge without persisting, even for ids never served.
    body["id"] = json!(id);
    Json(body).into_response()
}

async fn delete_product(State(state): State<Arc<StubState>>, Path(id): Path<i64>) -> Response {
    state.delete_hits.fetch_add(1, Ordering::Relaxed);
    if let Some(status) = state.failure() {
        return failure_response(status).into_response();
    }
    match find_product(&state.catalog(), id) {
        Some(product) => Json(product).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
