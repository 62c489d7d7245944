use std::time::Duration;

use super::DashClient;
use crate::core::DashError;

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`, capped at `max`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
    },
}

impl Backoff {
    /// Delay before retry number `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let secs = base.as_secs_f64() * factor.powi(exp);
                if secs.is_finite() && secs < max.as_secs_f64() {
                    Duration::from_secs_f64(secs)
                } else {
                    *max
                }
            }
        }
    }
}

/// Configuration for the automatic retry mechanism.
///
/// The client does not retry unless a config is installed with
/// [`DashClientBuilder::retry_config`](super::DashClientBuilder::retry_config):
/// a failed panel otherwise waits for the next scheduled or manual refresh.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl RetryConfig {
    /// A config that performs exactly one attempt.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl DashClient {
    /// Sends `req`, retrying according to the override or the client's policy.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, DashError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        if !cfg.enabled || cfg.max_retries == 0 {
            return Ok(req.send().await?);
        }

        let mut attempt = 0u32;
        loop {
            // Bodies on our GETs are empty, so the clone only fails for streaming requests.
            let Some(this_try) = req.try_clone() else {
                return Ok(req.send().await?);
            };

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.retry_on_status.contains(&status) {
                        tracing::debug!(status, attempt, url = %resp.url(), "retrying on status");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if retryable && attempt < cfg.max_retries {
                        tracing::debug!(error = %e, attempt, "retrying on transport error");
                        tokio::time::sleep(cfg.backoff.delay(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}
