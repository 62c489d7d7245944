//! sec-dashboard: polling client and panel renderer for an SEC filings analytics API.
//!
//! The crate talks to a server exposing trading opportunities derived from
//! 13D/13G filings, sector activity, the raw filings listing and form-type
//! trends. [`DashClient`] wraps the HTTP surface; [`Dashboard`] keeps the
//! last-fetched data, renders it into HTML panels and refreshes it on a timer.
//!
//! ```no_run
//! # async fn run() -> Result<(), sec_dashboard::DashError> {
//! use sec_dashboard::{DashClient, Dashboard};
//!
//! let base = url::Url::parse("http://127.0.0.1:8000")?;
//! let client = DashClient::builder().base_url(base).build()?;
//! let dashboard = Dashboard::builder(&client).build()?;
//! dashboard.init().await;
//! let task = dashboard.start();
//! // ... later
//! task.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dashboard;
pub mod format;
pub mod page;
pub mod render;

pub mod companies;
pub mod filings;
pub mod health;
pub mod opportunities;
pub mod sectors;
pub mod trends;

pub use core::{
    DashClient, DashClientBuilder, DashError,
    client::{Backoff, RetryConfig},
};
pub use dashboard::{
    ClientState, Dashboard, DashboardBuilder, DashboardConfig, EventOutcome, InitReport,
    RefreshOutcome, RefreshReport, RefreshTask, SectionOutcome, UiEvent,
};
pub use filings::{Filing, FilingsBuilder, FilingsPage, FilingsQuery, FormFilter, SortOrder};
pub use health::HealthStatus;
pub use opportunities::{
    Analysis, CompanyRef, OpportunitiesBuilder, Opportunity, SignalStrength,
};
pub use page::{Page, PanelKind, PanelState, render_document};
pub use sectors::{SectorActivity, SectorActivityBuilder};
pub use trends::{FormTrend, FormTrendsBuilder};
pub use companies::CompaniesPage;
