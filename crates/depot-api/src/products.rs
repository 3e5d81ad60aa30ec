// ── Product endpoints ──
//
// Products are the only resource with a server-side paged listing:
// `GET /products` takes page/size/sortBy/sortDir and an optional keyword.

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{NewProduct, Page, Product, ProductPageQuery, ProductUpdate};

const RESOURCE: &str = "product";

impl ApiClient {
    /// Fetch the full (unpaged) product list.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        // Without pagination params the endpoint still answers with a
        // page envelope; request one oversized page and unwrap it.
        let query = ProductPageQuery {
            size: 1000,
            ..ProductPageQuery::default()
        };
        Ok(self.list_products_paged(&query).await?.content)
    }

    /// Fetch one page of products, optionally filtered by a name keyword.
    pub async fn list_products_paged(
        &self,
        query: &ProductPageQuery,
    ) -> Result<Page<Product>, Error> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("size", query.size.to_string()),
            ("sortBy", query.sort_by.clone()),
            ("sortDir", query.sort_dir.as_str().to_owned()),
        ];
        if let Some(ref keyword) = query.keyword {
            params.push(("keyword", keyword.clone()));
        }
        self.get_with_params("products", &params, RESOURCE).await
    }

    /// Fetch a single product by its identifier.
    pub async fn get_product(&self, id: &str) -> Result<Product, Error> {
        self.get_by_id(&format!("products/{id}"), RESOURCE, id).await
    }

    /// Search products by name substring via the dedicated endpoint.
    pub async fn search_products(&self, name: &str) -> Result<Vec<Product>, Error> {
        self.get_with_params("products/search", &[("name", name.to_owned())], RESOURCE)
            .await
    }

    /// Create a product. The identifier is client-supplied.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, Error> {
        self.post("products", product, RESOURCE).await
    }

    /// Replace all non-key fields of a product.
    pub async fn update_product(
        &self,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<Product, Error> {
        self.put(&format!("products/{id}"), update, RESOURCE, id)
            .await
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("products/{id}"), RESOURCE, id).await
    }
}
