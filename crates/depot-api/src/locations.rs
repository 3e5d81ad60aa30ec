// ── Storage location endpoints ──
//
// Locations search on warehouse code rather than name; otherwise the
// surface matches customers (full list, no server-side pagination).

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{NewStorageLocation, StorageLocation, StorageLocationUpdate};

const RESOURCE: &str = "location";

impl ApiClient {
    /// Fetch the full storage location list.
    pub async fn list_locations(&self) -> Result<Vec<StorageLocation>, Error> {
        self.get("locations", RESOURCE).await
    }

    /// Fetch a single location by its identifier.
    pub async fn get_location(&self, id: &str) -> Result<StorageLocation, Error> {
        self.get_by_id(&format!("locations/{id}"), RESOURCE, id)
            .await
    }

    /// Search locations by warehouse code via the dedicated endpoint.
    pub async fn search_locations(
        &self,
        warehouse_code: &str,
    ) -> Result<Vec<StorageLocation>, Error> {
        self.get_with_params(
            "locations/search",
            &[("warehouseCode", warehouse_code.to_owned())],
            RESOURCE,
        )
        .await
    }

    /// Create a storage location. The identifier is client-supplied.
    pub async fn create_location(
        &self,
        location: &NewStorageLocation,
    ) -> Result<StorageLocation, Error> {
        self.post("locations", location, RESOURCE).await
    }

    /// Replace all non-key fields of a location.
    pub async fn update_location(
        &self,
        id: &str,
        update: &StorageLocationUpdate,
    ) -> Result<StorageLocation, Error> {
        self.put(&format!("locations/{id}"), update, RESOURCE, id)
            .await
    }

    /// Delete a storage location.
    pub async fn delete_location(&self, id: &str) -> Result<(), Error> {
        self.delete(&format!("locations/{id}"), RESOURCE, id).await
    }
}
