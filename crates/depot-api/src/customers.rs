// ── Customer endpoints ──

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Customer, CustomerUpdate, NewCustomer};

const RESOURCE: &str = "customer";

impl ApiClient {
    /// Fetch the full customer list (no server-side pagination).
    pub async fn list_customers(&self) -> Result<Vec<Customer>, Error> {
        self.get("customers", RESOURCE).await
    }

    /// Fetch a single customer by its identifier.
    pub async fn get_customer(&self, id: &str) -> Result<Customer, Error> {
        self.get_by_id(&format!("customers/{id}"), RESOURCE, id)
            .await
    }

    /// Search customers by name substring via the dedicated endpoint.
    pub async fn search_customers(&self, name: &str) -> Result<Vec<Customer>, Error> {
        self.get_with_params("customers/search", &[("name", name.to_owned())], RESOURCE)
            .await
    }

    /// Create a customer. The identifier is client-supplied.
    pub async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer, Error> {
        self.post("customers", customer, RESOURCE).await
    }

    /// Replace all non-key fields of a customer.
    pub async fn update_customer(
        &self,
        id: &str,
        update: &CustomerUpdate,
    ) -> Result<Customer, Error> {
        self.put(&format!("customers/{id}"), update, RESOURCE, id)
            .await
    }

    /// Delete a customer.
    pub async fn delete_customer(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("customers/{id}"), RESOURCE, id).await
    }
}
