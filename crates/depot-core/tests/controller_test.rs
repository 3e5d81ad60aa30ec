#![allow(clippy::unwrap_used)]
// Integration tests for `EntityController` against a wiremock backend.
//
// These exercise the controller's observable contract: which endpoints
// each operation hits, how state reacts to success and failure, and the
// create-vs-update routing of `submit`.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use depot_api::ApiClient;
use depot_core::{
    CustomerResource, EntityController, NewProduct, NoticeLevel, ProductResource, SeverityLevel,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<ApiClient>) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    (server, Arc::new(client))
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 200, "message": "Success", "data": data })
}

fn product_json(id: &str, name: &str, safety_stock: i64) -> serde_json::Value {
    json!({
        "productId": id,
        "productName": name,
        "unit": "pcs",
        "safetyStock": safety_stock,
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    })
}

fn product_page(products: Vec<serde_json::Value>, total: u64) -> serde_json::Value {
    let len = u64::try_from(products.len()).unwrap();
    envelope(json!({
        "content": products,
        "page": 0,
        "size": 10,
        "totalPages": total.div_ceil(10),
        "totalElements": total,
        "hasNext": len < total,
        "hasPrevious": false,
        "isFirst": true,
        "isLast": len >= total
    }))
}

fn customer_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "customerId": id,
        "customerName": name,
        "address": "1 Dock Road",
        "phone": "03-1234-5678",
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    })
}

// ── refresh ─────────────────────────────────────────────────────────

#[tokio::test]
async fn refresh_replaces_items_and_page_counters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.refresh().await;

    let state = controller.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].product_id, "P1");
    assert_eq!(state.page.total_items, 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn failed_refresh_keeps_prior_items_and_notifies() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([customer_json("C1", "Acme")]))),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500, "message": "boom", "data": null
        })))
        .mount(&server)
        .await;

    let controller = EntityController::<CustomerResource>::new(client);
    let mut notices = controller.notices();

    controller.refresh().await;
    assert_eq!(controller.state().items.len(), 1);

    controller.refresh().await;
    let state = controller.state();
    assert_eq!(state.items.len(), 1, "failed fetch must keep prior items");
    assert!(!state.loading);

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("load customers"));
}

// ── run_search ──────────────────────────────────────────────────────

#[tokio::test]
async fn blank_search_is_equivalent_to_unfiltered_refresh() {
    let (server, client) = setup().await;

    // The plain listing must be hit; a keyword parameter must never appear.
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("keyword", "x"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(product_page(vec![], 0)))
        .expect(1)
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.run_search("   ").await;

    assert_eq!(controller.state().search_term, "");
}

#[tokio::test]
async fn paged_search_refetches_with_keyword_from_page_zero() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("keyword", "widget"))
        .and(query_param("page", "0"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.run_search("widget").await;

    let state = controller.state();
    assert_eq!(state.search_term, "widget");
    assert_eq!(state.items.len(), 1);
}

#[tokio::test]
async fn full_list_search_uses_dedicated_endpoint() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers/search"))
        .and(query_param("name", "Acme"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([customer_json("C1", "Acme")]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let controller = EntityController::<CustomerResource>::new(client);
    controller.run_search("Acme").await;

    assert_eq!(controller.state().items.len(), 1);
}

// ── submit routing ──────────────────────────────────────────────────

#[tokio::test]
async fn submit_without_editing_key_calls_create_never_update() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(product_json("P1", "Widget", 5))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.open_form(None);
    controller.set_draft(NewProduct {
        product_id: "P1".into(),
        product_name: "Widget".into(),
        specification: None,
        unit: "pcs".into(),
        safety_stock: 5,
    });
    controller.submit().await;

    let state = controller.state();
    assert!(!state.form_open, "successful submit closes the form");
    assert_eq!(state.items.len(), 1, "successful submit triggers a refresh");
}

#[tokio::test]
async fn submit_with_editing_key_calls_update_never_create() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/products/P1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(product_json("P1", "Widget", 15))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.refresh().await;

    let existing = controller.state().items[0].clone();
    controller.open_form(Some(&existing));
    let mut draft = controller.state().draft;
    draft.safety_stock = 15;
    controller.set_draft(draft);
    controller.submit().await;

    assert!(!controller.state().form_open);
}

#[tokio::test]
async fn failed_submit_keeps_form_open_and_draft_intact() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500, "message": "boom", "data": null
        })))
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    let mut notices = controller.notices();

    controller.open_form(None);
    controller.set_draft(NewProduct {
        product_id: "P1".into(),
        product_name: "Widget".into(),
        specification: None,
        unit: "pcs".into(),
        safety_stock: 5,
    });
    controller.submit().await;

    let state = controller.state();
    assert!(state.form_open, "failed submit must not close the form");
    assert_eq!(state.draft.product_id, "P1", "draft must be preserved");

    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("save product"));
}

// ── form lifecycle ──────────────────────────────────────────────────

#[tokio::test]
async fn open_then_close_leaves_no_draft_residue() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);
    controller.refresh().await;

    let existing = controller.state().items[0].clone();
    controller.open_form(Some(&existing));
    assert_eq!(controller.state().editing_key.as_deref(), Some("P1"));

    controller.close_form();
    let state = controller.state();
    assert_eq!(state.editing_key, None);
    assert_eq!(state.draft, NewProduct::default());
}

// ── remove ──────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_delete_leaves_items_unchanged_and_loading_false() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([customer_json("C1", "Acme")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/customers/C1"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500, "message": "boom", "data": null
        })))
        .mount(&server)
        .await;

    let controller = EntityController::<CustomerResource>::new(client);
    controller.refresh().await;
    assert!(!controller.state().loading);

    controller.remove("C1").await;

    let state = controller.state();
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
}

#[tokio::test]
async fn successful_delete_triggers_refresh() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/customers/C1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200, "message": "Customer deleted successfully", "data": null
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let controller = EntityController::<CustomerResource>::new(client);
    controller.remove("C1").await;

    assert!(controller.state().items.is_empty());
}

// ── end-to-end severity scenario ────────────────────────────────────

#[tokio::test]
async fn created_product_crosses_threshold_after_update() {
    let (server, client) = setup().await;

    // Listing first answers with safetyStock 5, then 15 after the update.
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 5)], 1)),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(product_json("P1", "Widget", 5))),
        )
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/products/P1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(product_json("P1", "Widget", 15))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(product_page(vec![product_json("P1", "Widget", 15)], 1)),
        )
        .mount(&server)
        .await;

    let controller = EntityController::<ProductResource>::new(client);

    controller.open_form(None);
    controller.set_draft(NewProduct {
        product_id: "P1".into(),
        product_name: "Widget".into(),
        specification: None,
        unit: "pcs".into(),
        safety_stock: 5,
    });
    controller.submit().await;

    let state = controller.state();
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].safety_stock, 5);
    assert_eq!(
        SeverityLevel::for_safety_stock(state.items[0].safety_stock),
        SeverityLevel::Low
    );

    let existing = state.items[0].clone();
    controller.open_form(Some(&existing));
    let mut draft = controller.state().draft;
    draft.safety_stock = 15;
    controller.set_draft(draft);
    controller.submit().await;

    let state = controller.state();
    assert_eq!(state.items[0].safety_stock, 15);
    assert_eq!(
        SeverityLevel::for_safety_stock(state.items[0].safety_stock),
        SeverityLevel::Ok
    );
}
