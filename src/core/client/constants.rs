//! Centralized constants for default endpoints and UA.

/// Identifies the dashboard to the analytics API.
pub(crate) const USER_AGENT: &str = concat!("sec-dashboard/", env!("CARGO_PKG_VERSION"));

/// The analytics server's default origin (the page's own origin in a browser deployment).
pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// Connectivity check.
pub(crate) const HEALTH_PATH: &str = "health";

/// Trading opportunities (filings enriched with signal strength).
pub(crate) const OPPORTUNITIES_PATH: &str = "api/v1/filings/trading-opportunities";

/// Per-sector aggregate statistics.
pub(crate) const SECTOR_ACTIVITY_PATH: &str = "api/v1/analytics/sector-activity";

/// Per-form-type aggregate statistics.
pub(crate) const FORM_TRENDS_PATH: &str = "api/v1/analytics/form-type-trends";

/// Filings listing. The trailing slash is part of the route.
pub(crate) const FILINGS_PATH: &str = "api/v1/filings/";

/// Companies listing. The trailing slash is part of the route.
pub(crate) const COMPANIES_PATH: &str = "api/v1/companies/";
