use std::time::Duration;

use sec_dashboard::{DashClient, Dashboard, FormFilter, RefreshOutcome, UiEvent};
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sec_dashboard=debug")),
        )
        .init();

    // 1. Point the client at a running analytics server (SEC_DASHBOARD_URL, or the local default).
    let base = std::env::var("SEC_DASHBOARD_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
    let client = DashClient::builder()
        .base_url(Url::parse(&base)?)
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Build the dashboard with the trends panel and a short refresh period.
    let dashboard = Dashboard::builder(&client)
        .with_form_trends(true)
        .refresh_interval(Duration::from_secs(30))
        .build()?;

    let report = dashboard.init().await;
    println!("connected: {}", report.connected);
    if let RefreshOutcome::Completed(r) = &report.refresh {
        println!("first refresh: {r:?}");
    }

    // 3. Simulate a user narrowing the view.
    dashboard
        .dispatch(UiEvent::FormTypeSelected(FormFilter::form("13D")))
        .await;
    dashboard
        .dispatch(UiEvent::MinOwnershipChanged("7.5".into()))
        .await;

    let page = dashboard.page().await;
    println!("--- Stats ---");
    println!("Companies tracked:    {}", page.stats.total_companies);
    println!("Total filings:        {}", page.stats.total_filings);
    println!("Active opportunities: {}", page.stats.active_opportunities);
    println!("Total position value: {}", page.stats.total_value);

    // 4. Keep refreshing in the background, then write the page out.
    let task = dashboard.start();
    tokio::time::sleep(Duration::from_secs(65)).await;
    task.stop().await;

    let path = std::env::temp_dir().join("sec_dashboard.html");
    std::fs::write(&path, dashboard.render_document().await)?;
    println!("wrote {}", path.display());
    Ok(())
}
