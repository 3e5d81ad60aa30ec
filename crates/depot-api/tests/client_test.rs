#![allow(clippy::unwrap_used)]
// Integration tests for `ApiClient` using wiremock.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use depot_api::{
    ApiClient, Error, NewProduct, ProductPageQuery, ProductUpdate, SortDir,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();
    (server, client)
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 200, "message": "Success", "data": data })
}

fn product_json(id: &str, name: &str, safety_stock: i64) -> serde_json::Value {
    json!({
        "productId": id,
        "productName": name,
        "specification": "10x10cm",
        "unit": "pcs",
        "safetyStock": safety_stock,
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    })
}

// ── Paged listing ───────────────────────────────────────────────────

#[tokio::test]
async fn list_products_paged_sends_query_and_unwraps_page() {
    let (server, client) = setup().await;

    let body = envelope(json!({
        "content": [product_json("P1", "Widget", 5)],
        "page": 0,
        "size": 10,
        "totalPages": 1,
        "totalElements": 1,
        "hasNext": false,
        "hasPrevious": false,
        "isFirst": true,
        "isLast": true
    }));

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .and(query_param("sortBy", "createdAt"))
        .and(query_param("sortDir", "DESC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let page = client
        .list_products_paged(&ProductPageQuery::default())
        .await
        .unwrap();

    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].product_id, "P1");
    assert_eq!(page.content[0].safety_stock, 5);
    assert!(page.is_first);
}

#[tokio::test]
async fn keyword_is_forwarded_when_present() {
    let (server, client) = setup().await;

    let body = envelope(json!({
        "content": [],
        "page": 0,
        "size": 10,
        "totalPages": 0,
        "totalElements": 0,
        "hasNext": false,
        "hasPrevious": false,
        "isFirst": true,
        "isLast": true
    }));

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("keyword", "widget"))
        .and(query_param("sortDir", "ASC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let query = ProductPageQuery {
        sort_dir: SortDir::Asc,
        keyword: Some("widget".into()),
        ..ProductPageQuery::default()
    };
    let page = client.list_products_paged(&query).await.unwrap();
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
async fn last_page_returns_remaining_records() {
    let (server, client) = setup().await;

    // 25 records at size 10: page 2 carries the trailing 5.
    let remaining: Vec<_> = (20..25)
        .map(|i| product_json(&format!("P{i}"), "Widget", 12))
        .collect();
    let body = envelope(json!({
        "content": remaining,
        "page": 2,
        "size": 10,
        "totalPages": 3,
        "totalElements": 25,
        "hasNext": false,
        "hasPrevious": true,
        "isFirst": false,
        "isLast": true
    }));

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("page", "2"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let query = ProductPageQuery {
        page: 2,
        ..ProductPageQuery::default()
    };
    let page = client.list_products_paged(&query).await.unwrap();

    assert_eq!(page.content.len(), 5);
    assert_eq!(page.total_elements, 25);
    assert!(!page.has_next);
    assert!(page.is_last);
}

// ── CRUD round trips ────────────────────────────────────────────────

#[tokio::test]
async fn create_product_posts_full_record_minus_timestamps() {
    let (server, client) = setup().await;

    let new_product = NewProduct {
        product_id: "P1".into(),
        product_name: "Widget".into(),
        specification: None,
        unit: "pcs".into(),
        safety_stock: 5,
    };

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "productId": "P1",
            "productName": "Widget",
            "unit": "pcs",
            "safetyStock": 5
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(envelope(product_json("P1", "Widget", 5))),
        )
        .mount(&server)
        .await;

    let created = client.create_product(&new_product).await.unwrap();
    assert_eq!(created.product_id, "P1");
}

#[tokio::test]
async fn update_product_puts_to_keyed_path_without_id_in_body() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/api/products/P1"))
        .and(body_json(json!({
            "productName": "Widget",
            "unit": "pcs",
            "safetyStock": 15
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(product_json("P1", "Widget", 15))),
        )
        .mount(&server)
        .await;

    let updated = client
        .update_product(
            "P1",
            &ProductUpdate {
                product_name: "Widget".into(),
                specification: None,
                unit: "pcs".into(),
                safety_stock: 15,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.safety_stock, 15);
}

#[tokio::test]
async fn delete_product_accepts_null_data() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/products/P1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "message": "Product deleted successfully",
            "data": null
        })))
        .mount(&server)
        .await;

    client.delete_product("P1").await.unwrap();
}

#[tokio::test]
async fn search_customers_hits_dedicated_endpoint() {
    let (server, client) = setup().await;

    let body = envelope(json!([{
        "customerId": "C1",
        "customerName": "Acme Logistics",
        "address": "1 Dock Road",
        "phone": "03-1234-5678",
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    }]));

    Mock::given(method("GET"))
        .and(path("/api/customers/search"))
        .and(query_param("name", "Acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let found = client.search_customers("Acme").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].customer_id, "C1");
}

#[tokio::test]
async fn search_locations_filters_on_warehouse_code() {
    let (server, client) = setup().await;

    let body = envelope(json!([{
        "locationId": "L1",
        "warehouseCode": "WH-01",
        "zone": "A",
        "rack": "R3",
        "levelNo": "2",
        "position": "14",
        "maxCapacity": 80,
        "createdAt": "2025-06-01T09:30:00"
    }]));

    Mock::given(method("GET"))
        .and(path("/api/locations/search"))
        .and(query_param("warehouseCode", "WH-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let found = client.search_locations("WH-01").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].max_capacity, 80);
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn missing_product_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/products/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "message": "Product not found",
            "data": null
        })))
        .mount(&server)
        .await;

    let result = client.get_product("NOPE").await;
    match result {
        Err(Error::NotFound { resource, id }) => {
            assert_eq!(resource, "product");
            assert_eq!(id, "NOPE");
        }
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_envelope_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500,
            "message": "Failed to retrieve customers: connection refused",
            "data": null
        })))
        .mount(&server)
        .await;

    let result = client.list_customers().await;
    match result {
        Err(Error::Api { status, code, ref message }) => {
            assert_eq!(status, 500);
            assert_eq!(code, 500);
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn error_code_in_success_status_is_still_an_error() {
    let (server, client) = setup().await;

    // An envelope reporting failure despite HTTP 200.
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 400,
            "message": "Customer ID is required",
            "data": null
        })))
        .mount(&server)
        .await;

    let result = client.list_customers().await;
    assert!(matches!(result, Err(Error::Api { code: 400, .. })));
}

#[tokio::test]
async fn undecodable_body_maps_to_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let result = client.list_customers().await;
    assert!(matches!(result, Err(Error::Deserialization { .. })));
}

// ── Health ──────────────────────────────────────────────────────────

#[tokio::test]
async fn health_probe_unwraps_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "status": "UP",
            "application": "Logistics System",
            "version": "1.0.0",
            "timestamp": "2025-06-01T09:30:00"
        }))))
        .mount(&server)
        .await;

    let health = client.health().await.unwrap();
    assert_eq!(health.status, "UP");
    assert_eq!(health.version.as_deref(), Some("1.0.0"));
}
