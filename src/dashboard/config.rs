use std::time::Duration;

use crate::filings::{FormFilter, SortOrder};
use crate::opportunities::DEFAULT_MIN_OWNERSHIP;

/// Everything the controller needs besides the HTTP client.
///
/// Defaults reproduce the browser dashboard: a five-minute refresh, 60/30/14
/// day lookbacks, ten most recent filings, and a 5% ownership threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Period of the repeating refresh task.
    pub refresh_interval: Duration,
    /// Threshold used when the ownership input is empty, invalid or zero.
    pub default_min_ownership: f64,
    pub opportunities_days_back: u32,
    pub sector_days_back: u32,
    pub filings_days_back: u32,
    pub filings_limit: u32,
    pub filings_sort_by: String,
    pub filings_order: SortOrder,
    /// `limit` sent with the two total-count requests.
    pub stats_total_limit: u32,
    /// Filter bar buttons, in display order; the first starts active.
    pub form_filters: Vec<FormFilter>,
    /// Adds the form-type trends panel to the page and the refresh fan-out.
    pub include_form_trends: bool,
    pub trends_days_back: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_secs(300),
            default_min_ownership: DEFAULT_MIN_OWNERSHIP,
            opportunities_days_back: 60,
            sector_days_back: 30,
            filings_days_back: 14,
            filings_limit: 10,
            filings_sort_by: "filing_date".into(),
            filings_order: SortOrder::Desc,
            stats_total_limit: 1,
            form_filters: FormFilter::defaults(),
            include_form_trends: false,
            trends_days_back: 90,
        }
    }
}

impl DashboardConfig {
    /// Reads the ownership input the way the page always has: a positive
    /// number is used as-is, anything else falls back to the default.
    pub fn parse_min_ownership(&self, raw: &str) -> f64 {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(self.default_min_ownership)
    }

    /// The initial text of the ownership input.
    pub(crate) fn min_ownership_input(&self) -> String {
        format!("{:.1}", self.default_min_ownership)
    }
}
