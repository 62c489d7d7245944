//! Public client surface + builder.
//! Internals are split into `retry` (backoff policy) and `constants` (UA + routes).

mod constants;
mod retry;

pub use retry::{Backoff, RetryConfig};

use crate::core::DashError;
use constants::{
    COMPANIES_PATH, DEFAULT_BASE_URL, FILINGS_PATH, FORM_TRENDS_PATH, HEALTH_PATH,
    OPPORTUNITIES_PATH, SECTOR_ACTIVITY_PATH, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP handle to the filings analytics API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_url: Url,
    retry: RetryConfig,
}

impl Default for DashClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /// The origin every route is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The retry policy applied when a call does not override it.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn health_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(HEALTH_PATH)?)
    }
    pub(crate) fn opportunities_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(OPPORTUNITIES_PATH)?)
    }
    pub(crate) fn sector_activity_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(SECTOR_ACTIVITY_PATH)?)
    }
    pub(crate) fn form_trends_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(FORM_TRENDS_PATH)?)
    }
    pub(crate) fn filings_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(FILINGS_PATH)?)
    }
    pub(crate) fn companies_url(&self) -> Result<Url, DashError> {
        Ok(self.base_url.join(COMPANIES_PATH)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct DashClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    retry: Option<RetryConfig>,
}

impl DashClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API origin (e.g., `http://127.0.0.1:8000/`).
    ///
    /// A base with a path prefix is treated as a directory, so
    /// `http://host/dash` and `http://host/dash/` resolve routes identically.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Install a retry policy. Default: a single attempt per request.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Fails if the default base URL cannot be parsed or the TLS backend
    /// cannot be initialised.
    pub fn build(self) -> Result<DashClient, DashError> {
        let mut base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DashClient {
            http,
            base_url,
            retry: self.retry.unwrap_or_else(RetryConfig::disabled),
        })
    }
}
