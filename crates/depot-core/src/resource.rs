// ── Resource trait: one entity's binding to the API surface ──
//
// The controller is generic; everything entity-specific (draft shape,
// which endpoints to hit, whether listing is server-paged) lives behind
// this trait. Three implementations: products, customers, locations.

use std::future::Future;

use depot_api::models::{
    Customer, CustomerUpdate, NewCustomer, NewProduct, NewStorageLocation, Page, Product,
    ProductPageQuery, ProductUpdate, StorageLocation, StorageLocationUpdate,
};
use depot_api::{ApiClient, Error};

/// Parameters for a list fetch, assembled from controller state.
#[derive(Debug, Clone, Default)]
pub struct FetchQuery {
    pub page: u32,
    pub page_size: u32,
    /// Active search keyword; `None` when the search box is blank.
    pub keyword: Option<String>,
}

/// Pagination counters from a server-paged response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounters {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl<T> From<&Page<T>> for PageCounters {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            page_size: page.size,
            total_items: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

/// Result of a list fetch. `counters` is `None` for resources served as
/// full lists (customers, locations).
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub counters: Option<PageCounters>,
}

/// Binds an entity type to its draft shape and API operations.
///
/// Methods return `impl Future` rather than using `async fn` so the
/// futures are `Send` by contract and the trait stays usable from
/// spawned tasks.
pub trait Resource: Sized + Send + Sync + 'static {
    type Entity: Clone + Send + Sync + 'static;
    /// The in-progress, unsaved record held by the form. Carries the
    /// identifier (needed for create); update calls strip it.
    type Draft: Clone + Default + Send + Sync + 'static;

    /// Singular lower-case name, used in log lines ("product").
    const NAME: &'static str;
    /// Singular display label, used in user-facing notices ("Product").
    const LABEL: &'static str;
    /// Whether listing is server-paged (products) or a full list.
    const PAGED: bool;

    /// The entity's immutable identifier.
    fn key(entity: &Self::Entity) -> &str;

    /// Seed a form draft from an existing record.
    fn draft_from(entity: &Self::Entity) -> Self::Draft;

    fn fetch(
        client: &ApiClient,
        query: &FetchQuery,
    ) -> impl Future<Output = Result<Fetched<Self::Entity>, Error>> + Send;

    fn search(
        client: &ApiClient,
        term: &str,
    ) -> impl Future<Output = Result<Vec<Self::Entity>, Error>> + Send;

    fn create(
        client: &ApiClient,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    fn update(
        client: &ApiClient,
        key: &str,
        draft: &Self::Draft,
    ) -> impl Future<Output = Result<Self::Entity, Error>> + Send;

    fn delete(client: &ApiClient, key: &str) -> impl Future<Output = Result<(), Error>> + Send;
}

// ── Products (server-paged) ─────────────────────────────────────────

pub struct ProductResource;

impl Resource for ProductResource {
    type Entity = Product;
    type Draft = NewProduct;

    const NAME: &'static str = "product";
    const LABEL: &'static str = "Product";
    const PAGED: bool = true;

    fn key(entity: &Self::Entity) -> &str {
        &entity.product_id
    }

    fn draft_from(entity: &Self::Entity) -> Self::Draft {
        NewProduct {
            product_id: entity.product_id.clone(),
            product_name: entity.product_name.clone(),
            specification: entity.specification.clone(),
            unit: entity.unit.clone(),
            safety_stock: entity.safety_stock,
        }
    }

    async fn fetch(client: &ApiClient, query: &FetchQuery) -> Result<Fetched<Product>, Error> {
        let page = client
            .list_products_paged(&ProductPageQuery {
                page: query.page,
                size: query.page_size,
                keyword: query.keyword.clone(),
                ..ProductPageQuery::default()
            })
            .await?;
        let counters = Some(PageCounters::from(&page));
        Ok(Fetched {
            items: page.content,
            counters,
        })
    }

    async fn search(client: &ApiClient, term: &str) -> Result<Vec<Product>, Error> {
        client.search_products(term).await
    }

    async fn create(client: &ApiClient, draft: &Self::Draft) -> Result<Product, Error> {
        client.create_product(draft).await
    }

    async fn update(client: &ApiClient, key: &str, draft: &Self::Draft) -> Result<Product, Error> {
        client
            .update_product(
                key,
                &ProductUpdate {
                    product_name: draft.product_name.clone(),
                    specification: draft.specification.clone(),
                    unit: draft.unit.clone(),
                    safety_stock: draft.safety_stock,
                },
            )
            .await
    }

    async fn delete(client: &ApiClient, key: &str) -> Result<(), Error> {
        client.delete_product(key).await
    }
}

// ── Customers (full list) ───────────────────────────────────────────

pub struct CustomerResource;

impl Resource for CustomerResource {
    type Entity = Customer;
    type Draft = NewCustomer;

    const NAME: &'static str = "customer";
    const LABEL: &'static str = "Customer";
    const PAGED: bool = false;

    fn key(entity: &Self::Entity) -> &str {
        &entity.customer_id
    }

    fn draft_from(entity: &Self::Entity) -> Self::Draft {
        NewCustomer {
            customer_id: entity.customer_id.clone(),
            customer_name: entity.customer_name.clone(),
            address: entity.address.clone(),
            phone: entity.phone.clone(),
        }
    }

    async fn fetch(client: &ApiClient, _query: &FetchQuery) -> Result<Fetched<Customer>, Error> {
        let items = client.list_customers().await?;
        Ok(Fetched {
            items,
            counters: None,
        })
    }

    async fn search(client: &ApiClient, term: &str) -> Result<Vec<Customer>, Error> {
        client.search_customers(term).await
    }

    async fn create(client: &ApiClient, draft: &Self::Draft) -> Result<Customer, Error> {
        client.create_customer(draft).await
    }

    async fn update(client: &ApiClient, key: &str, draft: &Self::Draft) -> Result<Customer, Error> {
        client
            .update_customer(
                key,
                &CustomerUpdate {
                    customer_name: draft.customer_name.clone(),
                    address: draft.address.clone(),
                    phone: draft.phone.clone(),
                },
            )
            .await
    }

    async fn delete(client: &ApiClient, key: &str) -> Result<(), Error> {
        client.delete_customer(key).await
    }
}

// ── Storage locations (full list) ───────────────────────────────────

pub struct LocationResource;

impl Resource for LocationResource {
    type Entity = StorageLocation;
    type Draft = NewStorageLocation;

    const NAME: &'static str = "location";
    const LABEL: &'static str = "Location";
    const PAGED: bool = false;

    fn key(entity: &Self::Entity) -> &str {
        &entity.location_id
    }

    fn draft_from(entity: &Self::Entity) -> Self::Draft {
        NewStorageLocation {
            location_id: entity.location_id.clone(),
            warehouse_code: entity.warehouse_code.clone(),
            zone: entity.zone.clone(),
            rack: entity.rack.clone(),
            level_no: entity.level_no.clone(),
            position: entity.position.clone(),
            max_capacity: entity.max_capacity,
        }
    }

    async fn fetch(
        client: &ApiClient,
        _query: &FetchQuery,
    ) -> Result<Fetched<StorageLocation>, Error> {
        let items = client.list_locations().await?;
        Ok(Fetched {
            items,
            counters: None,
        })
    }

    async fn search(client: &ApiClient, term: &str) -> Result<Vec<StorageLocation>, Error> {
        client.search_locations(term).await
    }

    async fn create(client: &ApiClient, draft: &Self::Draft) -> Result<StorageLocation, Error> {
        client.create_location(draft).await
    }

    async fn update(
        client: &ApiClient,
        key: &str,
        draft: &Self::Draft,
    ) -> Result<StorageLocation, Error> {
        client
            .update_location(
                key,
                &StorageLocationUpdate {
                    warehouse_code: draft.warehouse_code.clone(),
                    zone: draft.zone.clone(),
                    rack: draft.rack.clone(),
                    level_no: draft.level_no.clone(),
                    position: draft.position.clone(),
                    max_capacity: draft.max_capacity,
                },
            )
            .await
    }

    async fn delete(client: &ApiClient, key: &str) -> Result<(), Error> {
        client.delete_location(key).await
    }
}
