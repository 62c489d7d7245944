//! The companies listing, used only for its total count.

use serde::{Deserialize, Serialize};

use crate::core::{
    DashClient, DashError,
    client::RetryConfig,
    net,
    wire::{count, de_lenient_i64},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum CompaniesBody {
    Bare(Vec<serde_json::Value>),
    Envelope(CompaniesEnvelope),
}

#[derive(Deserialize)]
struct CompaniesEnvelope {
    #[serde(default, deserialize_with = "de_lenient_i64")]
    total: Option<i64>,
}

/// Aggregate view of the companies listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct CompaniesPage {
    /// Number of companies tracked by the server, when it reports one.
    pub total: Option<u64>,
}

impl DashClient {
    /// Requests `GET /api/v1/companies/?limit={limit}` and reads the total count.
    ///
    /// Only the server's `total` is read. A bare-array response, or an
    /// envelope without `total`, reports no count: the request is sent with a
    /// small `limit`, so counting the items would understate the listing.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` on transport, status or decoding failure.
    #[tracing::instrument(skip(self), err)]
    pub async fn companies_total(
        &self,
        limit: u32,
        retry_override: Option<&RetryConfig>,
    ) -> Result<CompaniesPage, DashError> {
        let mut url = self.companies_url()?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());

        let body: CompaniesBody = net::get_json(self, url, "companies", retry_override).await?;
        let total = match body {
            CompaniesBody::Bare(items) => {
                tracing::debug!(items = items.len(), "companies listing carries no total");
                None
            }
            CompaniesBody::Envelope(env) => env.total.map(|t| count(Some(t))),
        };
        Ok(CompaniesPage { total })
    }
}
