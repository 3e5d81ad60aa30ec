// ── Wire types for the back-office REST contract ──
//
// Field names on the wire are camelCase throughout. Entities are flat
// records with client-supplied identifiers; timestamps are server-assigned
// and zone-less (the backend emits ISO-8601 without an offset), hence
// `NaiveDateTime`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ── Response envelope ───────────────────────────────────────────────

/// The `{ code, message, data }` wrapper around every response body.
///
/// `data` is `null` on error responses, so it must stay optional here;
/// the client turns a missing payload on a success response into a
/// deserialization error.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub code: i32,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

// ── Pagination ──────────────────────────────────────────────────────

/// One server-side page of a collection (products only — customers and
/// locations are served as full lists).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(clippy::struct_excessive_bools)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based page index.
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_first: bool,
    pub is_last: bool,
}

/// Sort direction for the paged product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    /// Wire value for the `sortDir` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Query parameters for `GET /products?page&size&sortBy&sortDir[&keyword]`.
#[derive(Debug, Clone)]
pub struct ProductPageQuery {
    pub page: u32,
    pub size: u32,
    pub sort_by: String,
    pub sort_dir: SortDir,
    /// Substring filter on the product name. Omitted from the request
    /// entirely when `None`.
    pub keyword: Option<String>,
}

impl Default for ProductPageQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".into(),
            sort_dir: SortDir::Desc,
            keyword: None,
        }
    }
}

// ── Product ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    pub unit: String,
    pub safety_stock: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Create body: the full record minus server-assigned timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub product_id: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    pub unit: String,
    pub safety_stock: i64,
}

/// Update body: all non-key fields, full replacement. The identifier is
/// immutable and travels in the URL path only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    pub unit: String,
    pub safety_stock: i64,
}

// ── Customer ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub customer_id: String,
    pub customer_name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub customer_name: String,
    pub address: String,
    pub phone: String,
}

// ── Storage location ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLocation {
    pub location_id: String,
    pub warehouse_code: String,
    pub zone: String,
    pub rack: String,
    pub level_no: String,
    pub position: String,
    pub max_capacity: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStorageLocation {
    pub location_id: String,
    pub warehouse_code: String,
    pub zone: String,
    pub rack: String,
    pub level_no: String,
    pub position: String,
    pub max_capacity: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageLocationUpdate {
    pub warehouse_code: String,
    pub zone: String,
    pub rack: String,
    pub level_no: String,
    pub position: String,
    pub max_capacity: i64,
}

// ── Health ──────────────────────────────────────────────────────────

/// Payload of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub application: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn page_deserializes_spec_shape() {
        let json = r#"{
            "content": [],
            "page": 2,
            "size": 10,
            "totalPages": 3,
            "totalElements": 25,
            "hasNext": false,
            "hasPrevious": true,
            "isFirst": false,
            "isLast": true
        }"#;
        let page: Page<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_elements, 25);
        assert!(!page.has_next);
        assert!(page.is_last);
    }

    #[test]
    fn new_product_omits_absent_specification() {
        let body = serde_json::to_value(NewProduct {
            product_id: "P1".into(),
            product_name: "Widget".into(),
            specification: None,
            unit: "pcs".into(),
            safety_stock: 5,
        })
        .unwrap();
        assert!(body.get("specification").is_none());
        assert_eq!(body["productId"], "P1");
        assert_eq!(body["safetyStock"], 5);
    }

    #[test]
    fn update_bodies_carry_no_identifier() {
        let body = serde_json::to_value(ProductUpdate {
            product_name: "Widget".into(),
            specification: Some("10x10".into()),
            unit: "pcs".into(),
            safety_stock: 15,
        })
        .unwrap();
        assert!(body.get("productId").is_none());
        assert_eq!(body["specification"], "10x10");
    }

    #[test]
    fn product_parses_backend_timestamps() {
        let json = r#"{
            "productId": "P1",
            "productName": "Widget",
            "unit": "pcs",
            "safetyStock": 5,
            "createdAt": "2025-06-01T09:30:00",
            "updatedAt": "2025-06-02T10:00:00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.specification, None);
        assert_eq!(product.created_at.to_string(), "2025-06-01 09:30:00");
    }

    #[test]
    fn sort_dir_wire_values() {
        assert_eq!(SortDir::Asc.as_str(), "ASC");
        assert_eq!(SortDir::default().as_str(), "DESC");
    }
}
