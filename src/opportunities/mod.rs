mod api;
mod model;
mod wire;

pub use model::{Analysis, CompanyRef, Opportunity, SignalStrength, total_position_value};

use crate::core::{DashClient, DashError, client::RetryConfig};

/// Ownership threshold (percent) used when the filter input is empty or invalid.
pub const DEFAULT_MIN_OWNERSHIP: f64 = 5.0;

/// A builder for fetching trading opportunities.
#[derive(Clone)]
pub struct OpportunitiesBuilder {
    client: DashClient,
    min_ownership: f64,
    days_back: u32,
    retry_override: Option<RetryConfig>,
}

impl OpportunitiesBuilder {
    /// Creates a builder with a 5% threshold and a 60-day lookback.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            min_ownership: DEFAULT_MIN_OWNERSHIP,
            days_back: 60,
            retry_override: None,
        }
    }

    /// Only include filings at or above this ownership percent.
    #[must_use]
    pub const fn min_ownership(mut self, percent: f64) -> Self {
        self.min_ownership = percent;
        self
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
    /// Returns `DashError::InvalidParams` for a negative or non-finite
    /// threshold, otherwise any transport, status or decoding error.
    #[tracing::instrument(skip(self), err, fields(min_ownership = self.min_ownership, days_back = self.days_back))]
    pub async fn fetch(self) -> Result<Vec<Opportunity>, DashError> {
        api::fetch_opportunities(
            &self.client,
            self.min_ownership,
            self.days_back,
            self.retry_override.as_ref(),
        )
        .await
    }
}

impl DashClient {
    /// Starts a trading-opportunities request.
    pub fn opportunities(&self) -> OpportunitiesBuilder {
        OpportunitiesBuilder::new(self)
    }
}
