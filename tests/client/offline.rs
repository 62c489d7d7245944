use httpmock::Method::GET;
use sec_dashboard::{FormFilter, SignalStrength, SortOrder};

use crate::common::{client_for, fixture, setup_server};

#[tokio::test]
async fn health_reports_status_and_version() {
    let server = setup_server();
    let mock = crate::common::mock_health(&server);

    let health = client_for(&server).health().await.unwrap();
    mock.assert();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version.as_deref(), Some("2.0.0"));
}

#[tokio::test]
async fn health_without_status_defaults_to_ok() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(200).body("{}");
    });

    let health = client_for(&server).health().await.unwrap();
    mock.assert();
    assert_eq!(health.status, "ok");
    assert!(health.version.is_none());
}

#[tokio::test]
async fn opportunities_send_threshold_and_lookback() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/filings/trading-opportunities")
            .query_param("min_ownership", "7.5")
            .query_param("days_back", "60");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("opportunities_default"));
    });

    let opps = client_for(&server)
        .opportunities()
        .min_ownership(7.5)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(opps.len(), 2);
    assert_eq!(opps[0].company.ticker, "ACME");
    assert_eq!(opps[0].analysis.signal_strength, SignalStrength::Strong);
    assert!(opps[0].analysis.is_activist_form);
    // numbers sent as strings decode the same way
    assert_eq!(opps[1].filing.company_id, Some(31));
    assert_eq!(opps[1].filing.ownership_percent, 6.2);
    assert_eq!(opps[1].analysis.estimated_position_value, 2_500_000.0);
    assert_eq!(opps[1].analysis.days_since_filing, 13);
    assert_eq!(opps[1].analysis.ownership_tier, "");
}

#[tokio::test]
async fn negative_threshold_is_rejected_before_sending() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/filings/trading-opportunities");
        then.status(200).body(r#"{"opportunities":[]}"#);
    });

    let err = client_for(&server)
        .opportunities()
        .min_ownership(-1.0)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, sec_dashboard::DashError::InvalidParams(_)));
    mock.assert_calls(0);
}

#[tokio::test]
async fn sector_activity_decodes_partial_rows() {
    let server = setup_server();
    let mock = crate::common::mock_sectors(&server);

    let sectors = client_for(&server).sector_activity().fetch().await.unwrap();
    mock.assert();
    assert_eq!(sectors.len(), 2);
    assert_eq!(sectors[0].sector, "Technology");
    assert_eq!(sectors[1].filing_count, 6);
    assert_eq!(sectors[1].total_shares_tracked, 0.0);
    assert_eq!(sectors[1].activity_score, 3.0);
}

#[tokio::test]
async fn filings_form_type_only_sent_when_selected() {
    let server = setup_server();
    let thirteen_d = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/filings/")
            .query_param("form_type", "13D")
            .query_param("limit", "10")
            .query_param("sort_by", "filing_date")
            .query_param("order", "desc");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("filings_13d"));
    });
    let all = crate::common::mock_recent_filings(&server);

    let client = client_for(&server);
    let page = client
        .filings()
        .days_back(14)
        .limit(10)
        .sort_by("filing_date", SortOrder::Desc)
        .form_type(FormFilter::form("13D"))
        .fetch()
        .await
        .unwrap();
    thirteen_d.assert();
    assert_eq!(page.total, Some(1));
    assert!(page.filings.iter().all(|f| f.form_type == "13D"));

    let page = client
        .filings()
        .days_back(14)
        .limit(10)
        .sort_by("filing_date", SortOrder::Desc)
        .form_type(FormFilter::All)
        .fetch()
        .await
        .unwrap();
    all.assert();
    assert_eq!(page.filings.len(), 3);
}

#[tokio::test]
async fn bare_array_listing_has_no_total() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/filings/").query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"owner_name":"Solo"}]"#);
    });

    let page = client_for(&server).filings().limit(1).fetch().await.unwrap();
    mock.assert();
    // a bare array carries no server total
    assert_eq!(page.total, None);
    assert_eq!(page.filings[0].owner_name, "Solo");
}

#[tokio::test]
async fn companies_total_reads_envelope() {
    let server = setup_server();
    let mock = crate::common::mock_companies_total(&server);

    let page = client_for(&server).companies_total(1, None).await.unwrap();
    mock.assert();
    assert_eq!(page.total, Some(312));
}

#[tokio::test]
async fn form_trends_decode() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/analytics/form-type-trends")
            .query_param("days_back", "90");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("form_trends"));
    });

    let trends = client_for(&server).form_trends().fetch().await.unwrap();
    mock.assert();
    assert_eq!(trends.len(), 2);
    assert_eq!(trends[1].total_filings, 120);
    assert_eq!(trends[1].average_ownership, 6.1);
}
