mod wire;

use serde::Serialize;

use crate::core::{DashClient, DashError, client::RetryConfig, net};

/// What the server reported about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    /// Free-form status text (e.g. `"healthy"`). Defaults to `"ok"` when the body omits it.
    pub status: String,
    /// Server version, when reported.
    pub version: Option<String>,
}

impl DashClient {
    /// Checks `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, or a body
    /// that is not a JSON object.
    #[tracing::instrument(skip(self), err)]
    pub async fn health(&self) -> Result<HealthStatus, DashError> {
        self.health_with(None).await
    }

    /// Same as [`health`](Self::health) with a per-call retry override.
    ///
    /// # Errors
    ///
    /// See [`health`](Self::health).
    pub async fn health_with(
        &self,
        retry_override: Option<&RetryConfig>,
    ) -> Result<HealthStatus, DashError> {
        let env: wire::HealthEnvelope =
            net::get_json(self, self.health_url()?, "health", retry_override).await?;
        Ok(HealthStatus {
            status: env
                .status
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| "ok".to_string()),
            version: env.version,
        })
    }
}
