use httpmock::Method::GET;
use sec_dashboard::DashError;

use crate::common::{client_for, setup_server};

#[tokio::test]
async fn server_error_maps_to_server_error_variant() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/analytics/sector-activity");
        then.status(500).body("oops");
    });

    let err = client_for(&server)
        .sector_activity()
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        DashError::ServerError { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/api/v1/analytics/sector-activity"));
        }
        other => panic!("expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_route_maps_to_not_found() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(404);
    });

    let err = client_for(&server).health().await.unwrap_err();
    mock.assert();
    assert!(matches!(err, DashError::NotFound { .. }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_json_body_is_a_json_error() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/companies/");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client_for(&server).companies_total(1, None).await.unwrap_err();
    mock.assert();
    assert!(matches!(err, DashError::Json(_)));
}
