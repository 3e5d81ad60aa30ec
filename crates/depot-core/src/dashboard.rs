// ── Dashboard aggregator ──
//
// Single-shot fan-out read for the landing summary. Independent of the
// entity controllers: three parallel reads, total counts, first five rows
// of each list. A failed read degrades its own section to the zero
// default instead of failing the summary — acceptable for a landing view.

use serde::Serialize;
use tracing::warn;

use depot_api::ApiClient;
use depot_api::models::{Customer, Product, ProductPageQuery, StorageLocation};

/// Rows shown per "recent" table.
pub const RECENT_ROWS: usize = 5;

/// Page size used to read the product total. The contract has no
/// count-only endpoint, so one oversized page supplies `totalElements`.
const COUNT_PAGE_SIZE: u32 = 1000;

/// Summary counts and recent rows for the landing dashboard.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_products: u64,
    pub total_customers: u64,
    pub total_locations: u64,
    pub recent_products: Vec<Product>,
    pub recent_customers: Vec<Customer>,
    pub recent_locations: Vec<StorageLocation>,
}

/// Load the dashboard summary with three parallel reads.
///
/// Never fails: each failed read is logged at warn level and leaves its
/// section at the zero default.
pub async fn load_summary(client: &ApiClient) -> DashboardSummary {
    let count_query = ProductPageQuery {
        size: COUNT_PAGE_SIZE,
        ..ProductPageQuery::default()
    };
    let products = client.list_products_paged(&count_query);
    let customers = client.list_customers();
    let locations = client.list_locations();

    let (products, customers, locations) = tokio::join!(products, customers, locations);

    let mut summary = DashboardSummary::default();

    match products {
        Ok(page) => {
            summary.total_products = page.total_elements;
            summary.recent_products = page.content.into_iter().take(RECENT_ROWS).collect();
        }
        Err(e) => warn!(error = %e, "dashboard: product fetch failed"),
    }

    match customers {
        Ok(list) => {
            summary.total_customers = u64::try_from(list.len()).unwrap_or(u64::MAX);
            summary.recent_customers = list.into_iter().take(RECENT_ROWS).collect();
        }
        Err(e) => warn!(error = %e, "dashboard: customer fetch failed"),
    }

    match locations {
        Ok(list) => {
            summary.total_locations = u64::try_from(list.len()).unwrap_or(u64::MAX);
            summary.recent_locations = list.into_iter().take(RECENT_ROWS).collect();
        }
        Err(e) => warn!(error = %e, "dashboard: location fetch failed"),
    }

    summary
}
