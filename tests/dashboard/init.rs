use httpmock::Method::GET;
use sec_dashboard::{PanelState, RefreshOutcome, page::ids};

use crate::common::{dashboard_for, mock_happy, setup_server};

#[tokio::test]
async fn init_connects_and_fills_every_panel() {
    let server = setup_server();
    let mocks = mock_happy(&server);
    let dash = dashboard_for(&server);

    let report = dash.init().await;
    assert!(report.connected);
    match &report.refresh {
        RefreshOutcome::Completed(r) => assert!(r.all_loaded(), "{r:?}"),
        RefreshOutcome::Skipped => panic!("first refresh must run"),
    }

    mocks.health.assert();
    mocks.opportunities.assert();
    mocks.sectors.assert();
    mocks.filings.assert();
    mocks.filings_total.assert();
    mocks.companies_total.assert();

    let page = dash.page().await;
    assert_eq!(page.element(ids::STATUS_TEXT), Some("Connected (healthy, v2.0.0)"));
    assert_eq!(page.status.dot_class(), "status-dot connected");
    assert_eq!(page.element(ids::TOTAL_COMPANIES), Some("312"));
    assert_eq!(page.element(ids::TOTAL_FILINGS), Some("1874"));
    assert_eq!(page.element(ids::ACTIVE_OPPORTUNITIES), Some("2"));
    // 1.5B + 2.5M
    assert_eq!(page.element(ids::TOTAL_VALUE), Some("$1.5B"));
    assert!(page.last_updated.is_some());

    for panel in [&page.opportunities, &page.sectors, &page.filings] {
        assert_eq!(panel.state, PanelState::Loaded);
    }
    assert!(page.opportunities.html.contains("Acme Corp"));
    assert!(page.opportunities.html.contains("Globex"));
    assert!(page.sectors.html.contains(r#"<span class="activity-score">8.5</span>"#));
    assert!(page.filings.html.contains("Vanguard Group"));
}

#[tokio::test]
async fn failed_health_still_refreshes() {
    let server = setup_server();
    let health = server.mock(|when, then| {
        when.method(GET).path("/health");
        then.status(503);
    });
    let opportunities = crate::common::mock_opportunities(&server, "5.0", "opportunities_default");
    let sectors = crate::common::mock_sectors(&server);
    let filings = crate::common::mock_recent_filings(&server);
    crate::common::mock_filings_total(&server);
    crate::common::mock_companies_total(&server);

    let dash = dashboard_for(&server);
    let report = dash.init().await;

    health.assert();
    assert!(!report.connected);
    opportunities.assert();
    sectors.assert();
    filings.assert();

    let page = dash.page().await;
    assert_eq!(page.element(ids::STATUS_TEXT), Some("Connection failed"));
    assert_eq!(page.status.dot_class(), "status-dot disconnected");
    assert_eq!(page.opportunities.state, PanelState::Loaded);
}

#[tokio::test]
async fn unreachable_server_disconnects() {
    // nothing listens on port 9 of localhost
    let client = sec_dashboard::DashClient::builder()
        .base_url(url::Url::parse("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let dash = sec_dashboard::Dashboard::builder(&client).build().unwrap();

    assert!(!dash.check_health().await);
    let page = dash.page().await;
    assert_eq!(page.element(ids::STATUS_TEXT), Some("Connection failed"));
}
