//! Per-form-type filing trends (`/api/v1/analytics/form-type-trends`).

use serde::{Deserialize, Serialize};

use crate::core::{
    DashClient, DashError,
    client::RetryConfig,
    net,
    wire::{count, de_lenient_f64, de_lenient_i64, de_lenient_string, num, text},
};

#[derive(Deserialize)]
struct FormTrendsEnvelope {
    #[serde(default)]
    form_trends: Option<Vec<FormTrendNode>>,
}

#[derive(Deserialize, Default)]
struct FormTrendNode {
    #[serde(default, deserialize_with = "de_lenient_string")]
    form_type: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_i64")]
    total_filings: Option<i64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    average_ownership: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    latest_filing: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_string")]
    interpretation: Option<String>,
}

/// Aggregate statistics for one form type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormTrend {
    pub form_type: String,
    pub total_filings: u64,
    pub average_ownership: f64,
    /// Date of the most recent filing of this type, as sent by the server.
    pub latest_filing: String,
    /// Server-written reading of what the form type signals.
    pub interpretation: String,
}

impl From<FormTrendNode> for FormTrend {
    fn from(n: FormTrendNode) -> Self {
        Self {
            form_type: text(n.form_type),
            total_filings: count(n.total_filings),
            average_ownership: num(n.average_ownership),
            latest_filing: text(n.latest_filing),
            interpretation: text(n.interpretation),
        }
    }
}

/// A builder for fetching form-type trends.
#[derive(Clone)]
pub struct FormTrendsBuilder {
    client: DashClient,
    days_back: u32,
    retry_override: Option<RetryConfig>,
}

impl FormTrendsBuilder {
    /// Creates a builder with a 90-day lookback.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            days_back: 90,
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
    pub async fn fetch(self) -> Result<Vec<FormTrend>, DashError> {
        let mut url = self.client.form_trends_url()?;
        url.query_pairs_mut()
            .append_pair("days_back", &self.days_back.to_string());

        let env: FormTrendsEnvelope =
            net::get_json(&self.client, url, "form_trends", self.retry_override.as_ref()).await?;
        Ok(env
            .form_trends
            .unwrap_or_default()
            .into_iter()
            .map(FormTrend::from)
            .collect())
    }
}

impl DashClient {
    /// Starts a form-type trends request.
    pub fn form_trends(&self) -> FormTrendsBuilder {
        FormTrendsBuilder::new(self)
    }
}
