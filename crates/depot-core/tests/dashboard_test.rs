#![allow(clippy::unwrap_used)]
// Integration tests for the dashboard aggregator.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use depot_api::ApiClient;
use depot_core::load_summary;

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 200, "message": "Success", "data": data })
}

fn product_json(id: &str) -> serde_json::Value {
    json!({
        "productId": id,
        "productName": format!("Product {id}"),
        "unit": "pcs",
        "safetyStock": 12,
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    })
}

fn customer_json(id: &str) -> serde_json::Value {
    json!({
        "customerId": id,
        "customerName": format!("Customer {id}"),
        "address": "1 Dock Road",
        "phone": "03-1234-5678",
        "createdAt": "2025-06-01T09:30:00",
        "updatedAt": "2025-06-01T09:30:00"
    })
}

fn location_json(id: &str) -> serde_json::Value {
    json!({
        "locationId": id,
        "warehouseCode": "WH-01",
        "zone": "A",
        "rack": "R1",
        "levelNo": "1",
        "position": "1",
        "maxCapacity": 80,
        "createdAt": "2025-06-01T09:30:00"
    })
}

#[tokio::test]
async fn summary_reads_counts_and_truncates_recent_rows() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

    let products: Vec<_> = (0..8).map(|i| product_json(&format!("P{i}"))).collect();
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(query_param("size", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "content": products,
            "page": 0,
            "size": 1000,
            "totalPages": 1,
            "totalElements": 8,
            "hasNext": false,
            "hasPrevious": false,
            "isFirst": true,
            "isLast": true
        }))))
        .mount(&server)
        .await;

    let customers: Vec<_> = (0..3).map(|i| customer_json(&format!("C{i}"))).collect();
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(customers))))
        .mount(&server)
        .await;

    let locations: Vec<_> = (0..6).map(|i| location_json(&format!("L{i}"))).collect();
    Mock::given(method("GET"))
        .and(path("/api/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(locations))))
        .mount(&server)
        .await;

    let summary = load_summary(&client).await;

    assert_eq!(summary.total_products, 8);
    assert_eq!(summary.total_customers, 3);
    assert_eq!(summary.total_locations, 6);
    assert_eq!(summary.recent_products.len(), 5);
    assert_eq!(summary.recent_customers.len(), 3);
    assert_eq!(summary.recent_locations.len(), 5);
    assert_eq!(summary.recent_products[0].product_id, "P0");
}

#[tokio::test]
async fn one_failed_read_degrades_only_its_own_section() {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), Duration::from_secs(5)).unwrap();

    // Products fail; the other two sections must still populate.
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": 500, "message": "boom", "data": null
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/customers"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([customer_json("C1")]))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/locations"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(json!([location_json("L1")]))),
        )
        .mount(&server)
        .await;

    let summary = load_summary(&client).await;

    assert_eq!(summary.total_products, 0);
    assert!(summary.recent_products.is_empty());
    assert_eq!(summary.total_customers, 1);
    assert_eq!(summary.total_locations, 1);
}
