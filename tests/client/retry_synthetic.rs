use std::time::Duration;

use httpmock::Method::GET;
use sec_dashboard::{Backoff, DashClient, RetryConfig};
use url::Url;

use crate::common::{client_for, setup_server};

fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(5)),
        ..RetryConfig::default()
    }
}

#[tokio::test]
async fn default_client_makes_a_single_attempt() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    });

    let err = client_for(&server).health().await.unwrap_err();
    mock.assert_calls(1);
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn retryable_status_is_retried_up_to_the_limit() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    });

    let client = DashClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(fast_retry(2))
        .build()
        .unwrap();

    let err = client.health().await.unwrap_err();
    mock.assert_calls(3);
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn per_call_override_wins_over_client_policy() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/analytics/sector-activity");
        then.status(502);
    });

    let client = client_for(&server);
    let _ = client
        .sector_activity()
        .retry_policy(Some(fast_retry(1)))
        .fetch()
        .await
        .unwrap_err();
    mock.assert_calls(2);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(400);
    });

    let client = DashClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .retry_config(fast_retry(3))
        .build()
        .unwrap();

    let _ = client.health().await.unwrap_err();
    mock.assert_calls(1);
}
