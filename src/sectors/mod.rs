mod api;
mod model;
mod wire;

pub use model::SectorActivity;

use crate::core::{DashClient, DashError, client::RetryConfig};

/// A builder for fetching per-sector filing activity.
#[derive(Clone)]
pub struct SectorActivityBuilder {
    client: DashClient,
    days_back: u32,
    retry_override: Option<RetryConfig>,
}

impl SectorActivityBuilder {
    /// Creates a builder with a 30-day lookback.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            days_back: 30,
            retry_override: None,
        }
    }

    /// Lookback window in days.
    #[must_use]
    pub const fn days_back(mut self, days: u32) -> Self {
        self.days_back = days;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` on transport, status or decoding failure.
    #[tracing::instrument(skip(self), err, fields(days_back = self.days_back))]
    pub async fn fetch(self) -> Result<Vec<SectorActivity>, DashError> {
        api::fetch_sector_activity(&self.client, self.days_back, self.retry_override.as_ref())
            .await
    }
}

impl DashClient {
    /// Starts a sector-activity request.
    pub fn sector_activity(&self) -> SectorActivityBuilder {
        SectorActivityBuilder::new(self)
    }
}
