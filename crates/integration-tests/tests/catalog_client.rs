//! End-to-end tests for the remote catalog client's normalization rules.

use alt_store_catalog::{CatalogError, ErrorKind};
use alt_store_core::{Category, DraftError, ProductDraft, ProductId};
use alt_store_integration_tests::{ECHO_ID, StubCatalog, seeded_catalog, wire_product};
use axum::http::StatusCode;
use serde_json::json;

fn valid_draft() -> ProductDraft {
    ProductDraft {
        title: "New Gadget".to_owned(),
        price: "5".parse().expect("parse price"),
        description: "d".to_owned(),
        image: String::new(),
        category: Category::Jewelery,
    }
}

#[tokio::test]
async fn test_list_returns_catalog_in_served_order() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let products = stub.client().list_products().await.expect("list");

    let ids: Vec<i64> = products.iter().map(|p| p.id.as_i64()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5, 6]);
    assert_eq!(products[0].title, "Fjallraven Backpack");
    assert_eq!(
        products[0].rating.as_ref().expect("rating present").count,
        120
    );
}

#[tokio::test]
async fn test_get_known_id_returns_product() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let product = stub
        .client()
        .get_product(ProductId::new(3))
        .await
        .expect("get");

    assert_eq!(product.id, ProductId::new(3));
    assert_eq!(product.category, Category::Jewelery);
    assert_eq!(product.price.to_string(), "$695.00");
}

#[tokio::test]
async fn test_get_unknown_id_normalizes_null_body_to_not_found() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let err = stub
        .client()
        .get_product(ProductId::new(999))
        .await
        .expect_err("unknown id");

    assert!(matches!(err, CatalogError::NotFound(id) if id == ProductId::new(999)));
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_non_success_status_is_a_transport_error() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    stub.fail_with(StatusCode::INTERNAL_SERVER_ERROR);

    let err = stub.client().list_products().await.expect_err("500");
    assert!(matches!(
        err,
        CatalogError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    ));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_malformed_payload_is_a_decode_error() {
    // A catalog entry missing its required fields cannot decode.
    let stub = StubCatalog::start(vec![json!({"id": "not a number"})]).await;

    let err = stub.client().list_products().await.expect_err("bad shape");
    assert!(matches!(err, CatalogError::Decode(_)));
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[tokio::test]
async fn test_create_echo_is_returned_but_not_durable() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let client = stub.client();

    let echo = client.create_product(&valid_draft()).await.expect("create");
    assert_eq!(echo.id, ProductId::new(ECHO_ID));
    assert_eq!(echo.title, "New Gadget");

    // The write did not persist: the echoed id does not resolve.
    let err = client
        .get_product(ProductId::new(ECHO_ID))
        .await
        .expect_err("echo id never persisted");
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_invalid_draft_is_rejected_before_any_request() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let client = stub.client();

    let mut draft = valid_draft();
    draft.title = String::new();

    let create_err = client.create_product(&draft).await.expect_err("invalid");
    assert!(matches!(
        create_err,
        CatalogError::Validation(DraftError::EmptyTitle)
    ));
    assert_eq!(create_err.kind(), ErrorKind::Validation);

    let update_err = client
        .update_product(ProductId::new(1), &draft)
        .await
        .expect_err("invalid");
    assert_eq!(update_err.kind(), ErrorKind::Validation);

    let hits = stub.hits();
    assert_eq!(hits.create, 0);
    assert_eq!(hits.update, 0);
}

#[tokio::test]
async fn test_update_acknowledges_with_full_replace_echo() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let echo = stub
        .client()
        .update_product(ProductId::new(2), &valid_draft())
        .await
        .expect("update");

    assert_eq!(echo.id, ProductId::new(2));
    assert_eq!(echo.title, "New Gadget");
    assert_eq!(echo.category, Category::Jewelery);
}

#[tokio::test]
async fn test_delete_known_id_echoes_the_entity() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let removed = stub
        .client()
        .delete_product(ProductId::new(4))
        .await
        .expect("delete");

    assert_eq!(removed.expect("entity echoed").id, ProductId::new(4));
}

#[tokio::test]
async fn test_delete_unknown_id_is_ok_none() {
    let stub = StubCatalog::start(seeded_catalog()).await;
    let client = stub.client();

    assert!(
        client
            .delete_product(ProductId::new(999))
            .await
            .expect("404 normalized")
            .is_none()
    );
    // Idempotent from the caller's view: a repeat does not error either.
    assert!(
        client
            .delete_product(ProductId::new(999))
            .await
            .expect("repeat delete")
            .is_none()
    );
    assert_eq!(stub.hits().delete, 2);
}

#[tokio::test]
async fn test_healed_stub_serves_again() {
    let stub = StubCatalog::start(vec![wire_product(1, "A", 9.99, "electronics")]).await;
    stub.fail_with(StatusCode::BAD_GATEWAY);
    stub.client().list_products().await.expect_err("failing");

    stub.heal();
    let products = stub.client().list_products().await.expect("healed");
    assert_eq!(products.len(), 1);
}
