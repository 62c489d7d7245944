use httpmock::Method::GET;
use sec_dashboard::{PanelState, RefreshOutcome, SectionOutcome, page::ids};

use crate::common::{
    dashboard_for, mock_companies_total, mock_filings_total, mock_opportunities,
    mock_recent_filings, mock_sectors, setup_server,
};

fn completed(outcome: RefreshOutcome) -> sec_dashboard::RefreshReport {
    match outcome {
        RefreshOutcome::Completed(r) => r,
        RefreshOutcome::Skipped => panic!("refresh was skipped"),
    }
}

#[tokio::test]
async fn one_failing_panel_does_not_affect_the_others() {
    let server = setup_server();
    mock_opportunities(&server, "5.0", "opportunities_default");
    let sectors = server.mock(|when, then| {
        when.method(GET).path("/api/v1/analytics/sector-activity");
        then.status(500).body("boom");
    });
    mock_recent_filings(&server);
    mock_filings_total(&server);
    mock_companies_total(&server);

    let dash = dashboard_for(&server);
    let report = completed(dash.refresh().await);
    sectors.assert();

    assert_eq!(report.opportunities, SectionOutcome::Loaded(2));
    assert_eq!(report.filings, SectionOutcome::Loaded(3));
    assert!(matches!(report.sectors, SectionOutcome::Failed(_)));
    assert!(!report.all_loaded());

    let page = dash.page().await;
    assert_eq!(page.sectors.state, PanelState::Error);
    assert!(page.sectors.html.contains("Failed to load sector activity"));
    assert_eq!(page.opportunities.state, PanelState::Loaded);
    assert!(page.opportunities.html.contains("Acme Corp"));
    assert_eq!(page.filings.state, PanelState::Loaded);

    let state = dash.state().await;
    assert!(state.sectors.is_empty());
    assert_eq!(state.opportunities.len(), 2);
}

#[tokio::test]
async fn failure_keeps_the_previous_cache() {
    let server = setup_server();
    let mut ok = mock_sectors(&server);
    mock_opportunities(&server, "5.0", "opportunities_default");
    mock_recent_filings(&server);
    mock_filings_total(&server);
    mock_companies_total(&server);

    let dash = dashboard_for(&server);
    completed(dash.refresh().await);
    assert_eq!(dash.state().await.sectors.len(), 2);

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/analytics/sector-activity");
        then.status(503);
    });

    let report = completed(dash.refresh().await);
    assert!(matches!(report.sectors, SectionOutcome::Failed(_)));
    // the panel shows the error, the cache still holds the last good data
    assert_eq!(dash.page().await.sectors.state, PanelState::Error);
    assert_eq!(dash.state().await.sectors.len(), 2);
}

#[tokio::test]
async fn empty_opportunities_show_placeholder_and_zero_value() {
    let server = setup_server();
    mock_opportunities(&server, "5.0", "opportunities_empty");
    mock_sectors(&server);
    mock_recent_filings(&server);
    mock_filings_total(&server);
    mock_companies_total(&server);

    let dash = dashboard_for(&server);
    let report = completed(dash.refresh().await);
    assert_eq!(report.opportunities, SectionOutcome::Loaded(0));

    let page = dash.page().await;
    assert_eq!(page.opportunities.state, PanelState::Loaded);
    assert!(page.opportunities.html.contains("No trading opportunities found"));
    assert!(!page.opportunities.html.contains("error"));
    assert_eq!(page.element(ids::ACTIVE_OPPORTUNITIES), Some("0"));
    assert_eq!(page.element(ids::TOTAL_VALUE), Some("$0"));
}

#[tokio::test]
async fn stats_total_failure_shows_unavailable() {
    let server = setup_server();
    mock_opportunities(&server, "5.0", "opportunities_default");
    mock_sectors(&server);
    mock_recent_filings(&server);
    mock_filings_total(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/companies/");
        then.status(500);
    });

    let dash = dashboard_for(&server);
    let report = completed(dash.refresh().await);
    assert!(matches!(report.stats, SectionOutcome::Failed(_)));
    assert_eq!(report.opportunities, SectionOutcome::Loaded(2));

    let page = dash.page().await;
    assert_eq!(page.element(ids::TOTAL_COMPANIES), Some("--"));
    assert_eq!(page.element(ids::TOTAL_FILINGS), Some("--"));
    // derived from the cached opportunities, not the totals
    assert_eq!(page.element(ids::ACTIVE_OPPORTUNITIES), Some("2"));
    assert_eq!(page.element(ids::TOTAL_VALUE), Some("$1.5B"));
}

#[tokio::test]
async fn trends_panel_joins_the_cycle_when_enabled() {
    let server = setup_server();
    mock_opportunities(&server, "5.0", "opportunities_default");
    mock_sectors(&server);
    mock_recent_filings(&server);
    mock_filings_total(&server);
    mock_companies_total(&server);
    let trends = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/analytics/form-type-trends")
            .query_param("days_back", "90");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("form_trends"));
    });

    let client = crate::common::client_for(&server);
    let dash = sec_dashboard::Dashboard::builder(&client)
        .with_form_trends(true)
        .build()
        .unwrap();
    let report = completed(dash.refresh().await);
    trends.assert();
    assert_eq!(report.trends, Some(SectionOutcome::Loaded(2)));

    let page = dash.page().await;
    let panel = page.trends.as_ref().unwrap();
    assert_eq!(panel.state, PanelState::Loaded);
    assert!(panel.html.contains("Activist intent"));

    let doc = dash.render_document().await;
    assert!(doc.contains(r#"id="trends-container""#));
}

#[tokio::test]
async fn bare_array_listings_leave_totals_unavailable() {
    let server = setup_server();
    mock_opportunities(&server, "5.0", "opportunities_default");
    mock_sectors(&server);
    mock_recent_filings(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/filings/").query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"owner_name":"X"}]"#);
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/companies/").query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1}]"#);
    });

    let dash = dashboard_for(&server);
    let report = completed(dash.refresh().await);
    assert_eq!(report.stats, SectionOutcome::Loaded(2));

    let state = dash.state().await;
    assert_eq!(state.companies_total, None);
    assert_eq!(state.filings_total, None);

    let page = dash.page().await;
    assert_eq!(page.element(ids::TOTAL_COMPANIES), Some("--"));
    assert_eq!(page.element(ids::TOTAL_FILINGS), Some("--"));
    assert_eq!(page.element(ids::ACTIVE_OPPORTUNITIES), Some("2"));
}
