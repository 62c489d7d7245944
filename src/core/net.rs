use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{DashClient, DashError, client::RetryConfig};

/// Read the response body as text, turning a non-success status into an error.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, DashError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(DashError::from_status(status.as_u16(), resp.url().as_str()));
    }
    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "response body read");
    Ok(text)
}

/// GET `url` and decode the JSON envelope.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &DashClient,
    url: Url,
    endpoint: &str,
    retry_override: Option<&RetryConfig>,
) -> Result<T, DashError> {
    tracing::debug!(endpoint, %url, "fetching");
    let req = client
        .http()
        .get(url)
        .header("accept", "application/json");
    let resp = client.send_with_retry(req, retry_override).await?;
    let body = get_text(resp, endpoint).await?;
    Ok(serde_json::from_str(&body)?)
}
