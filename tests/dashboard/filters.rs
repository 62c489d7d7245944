use std::time::Duration;

use httpmock::{Method::GET, Mock, MockServer};
use sec_dashboard::{
    EventOutcome, FormFilter, PanelState, RefreshOutcome, SectionOutcome, UiEvent,
};

use crate::common::{
    dashboard_for, fixture, mock_companies_total, mock_filings_total, mock_happy,
    mock_opportunities, mock_sectors, setup_server,
};

fn mock_filings<'a>(server: &'a MockServer, form_type: Option<&str>, delay_ms: u64) -> Mock<'a> {
    server.mock(|when, then| {
        let when = when.method(GET).path("/api/v1/filings/").query_param("limit", "10");
        match form_type {
            Some(form) => when.query_param("form_type", form),
            None => when.query_param_missing("form_type"),
        };
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture(if form_type.is_some() { "filings_13d" } else { "filings_recent" }))
            .delay(Duration::from_millis(delay_ms));
    })
}

fn mock_other_sections(server: &MockServer) {
    mock_opportunities(server, "5.0", "opportunities_default");
    mock_sectors(server);
    mock_filings_total(server);
    mock_companies_total(server);
}

#[tokio::test]
async fn selecting_13d_refetches_only_filings() {
    let server = setup_server();
    let mocks = mock_happy(&server);
    let thirteen_d = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/filings/")
            .query_param("form_type", "13D")
            .query_param("limit", "10")
            .query_param("days_back", "14");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("filings_13d"));
    });

    let dash = dashboard_for(&server);
    dash.refresh().await;
    let before = dash.state().await;

    let outcome = dash
        .dispatch(UiEvent::FormTypeSelected(FormFilter::form("13D")))
        .await;
    assert_eq!(outcome, EventOutcome::Filings(SectionOutcome::Loaded(1)));
    thirteen_d.assert();

    // nothing else went back to the server
    mocks.opportunities.assert_calls(1);
    mocks.sectors.assert_calls(1);
    mocks.filings.assert_calls(1);
    mocks.companies_total.assert_calls(1);

    let after = dash.state().await;
    assert!(after.filings.iter().all(|f| f.form_type == "13D"));
    assert_eq!(after.opportunities, before.opportunities);
    assert_eq!(after.sectors, before.sectors);

    let page = dash.page().await;
    let active: Vec<_> = page.controls.form_filters.iter().filter(|b| b.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].filter, FormFilter::form("13D"));
    assert!(!page.filings.html.contains("Vanguard Group"));
}

#[tokio::test]
async fn refresh_keeps_the_selected_filter() {
    let server = setup_server();
    let mocks = mock_happy(&server);
    let thirteen_d = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/filings/")
            .query_param("form_type", "13D")
            .query_param("limit", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("filings_13d"));
    });

    let dash = dashboard_for(&server);
    dash.select_form_type(FormFilter::form("13D")).await;
    dash.dispatch(UiEvent::Refresh).await;

    thirteen_d.assert_calls(2);
    mocks.filings.assert_calls(0);
}

#[tokio::test]
async fn ownership_change_refetches_opportunities() {
    let server = setup_server();
    let mocks = mock_happy(&server);
    let eight = mock_opportunities(&server, "8.0", "opportunities_empty");

    let dash = dashboard_for(&server);
    dash.refresh().await;

    let outcome = dash
        .dispatch(UiEvent::MinOwnershipChanged("8".into()))
        .await;
    assert_eq!(outcome, EventOutcome::Opportunities(SectionOutcome::Loaded(0)));
    eight.assert();
    mocks.sectors.assert_calls(1);
    mocks.filings.assert_calls(1);

    let page = dash.page().await;
    assert_eq!(page.controls.min_ownership, "8");
    assert_eq!(page.stats.active_opportunities, "0");
    assert_eq!(page.stats.total_value, "$0");
    assert_eq!(page.opportunities.state, PanelState::Loaded);
}

#[tokio::test]
async fn invalid_ownership_input_uses_default_threshold() {
    let server = setup_server();
    let mocks = mock_happy(&server);

    let dash = dashboard_for(&server);
    dash.set_min_ownership("abc").await;
    dash.set_min_ownership("").await;

    mocks.opportunities.assert_calls(2);
    assert_eq!(dash.page().await.controls.min_ownership, "");
}

#[tokio::test]
async fn filter_click_during_refresh_wins() {
    let server = setup_server();
    mock_other_sections(&server);
    let all = mock_filings(&server, None, 400);
    let thirteen_d = mock_filings(&server, Some("13D"), 0);

    let dash = dashboard_for(&server);
    let cycle = tokio::spawn({
        let dash = dash.clone();
        async move { dash.refresh().await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let outcome = dash.select_form_type(FormFilter::form("13D")).await;
    assert_eq!(outcome, SectionOutcome::Loaded(1));

    let RefreshOutcome::Completed(report) = cycle.await.unwrap() else {
        panic!("refresh was skipped");
    };
    assert_eq!(report.filings, SectionOutcome::Superseded);
    all.assert_calls(1);
    thirteen_d.assert_calls(1);

    // the late unfiltered response never reached the panel
    let state = dash.state().await;
    assert!(state.filings.iter().all(|f| f.form_type == "13D"));
    let page = dash.page().await;
    assert_eq!(page.filings.state, PanelState::Loaded);
    assert!(!page.filings.html.contains("Vanguard Group"));
}

#[tokio::test]
async fn refresh_during_filter_click_requests_the_new_filter() {
    let server = setup_server();
    mock_other_sections(&server);
    let all = mock_filings(&server, None, 0);
    let thirteen_d = mock_filings(&server, Some("13D"), 300);

    let dash = dashboard_for(&server);
    let click = tokio::spawn({
        let dash = dash.clone();
        async move { dash.select_form_type(FormFilter::form("13D")).await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    let RefreshOutcome::Completed(report) = dash.refresh().await else {
        panic!("refresh was skipped");
    };
    assert_eq!(report.filings, SectionOutcome::Loaded(1));
    assert_eq!(click.await.unwrap(), SectionOutcome::Superseded);

    // the cycle picked up the filter selected before it started
    all.assert_calls(0);
    thirteen_d.assert_calls(2);
    assert!(dash.state().await.filings.iter().all(|f| f.form_type == "13D"));
}
