// ── Health endpoint ──

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::HealthStatus;

impl ApiClient {
    /// Probe `GET /api/health`. Useful as a connectivity check before
    /// entering the interactive UI.
    pub async fn health(&self) -> Result<HealthStatus, Error> {
        self.get("health", "health").await
    }
}
