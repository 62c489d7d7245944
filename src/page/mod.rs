//! The host document the dashboard renders into.
//!
//! [`Page`] mirrors the DOM surface the dashboard binds to: the connection
//! indicator, the stats strip, one container per panel, and the filter
//! controls. Element ids are fixed in [`ids`]; [`render_document`] serialises
//! the whole page.

mod html;

pub use html::render_document;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::filings::FormFilter;
use crate::health::HealthStatus;
use crate::render;

/// DOM ids shared with the host document.
pub mod ids {
    pub const STATUS_DOT: &str = "status-dot";
    pub const STATUS_TEXT: &str = "status-text";
    pub const TOTAL_COMPANIES: &str = "total-companies";
    pub const TOTAL_FILINGS: &str = "total-filings";
    pub const ACTIVE_OPPORTUNITIES: &str = "active-opportunities";
    pub const TOTAL_VALUE: &str = "total-value";
    pub const OPPORTUNITIES: &str = "opportunities-container";
    pub const SECTORS: &str = "sector-container";
    pub const FILINGS: &str = "filings-container";
    pub const TRENDS: &str = "trends-container";
    pub const REFRESH_BUTTON: &str = "refresh-btn";
    pub const OWNERSHIP_FILTER: &str = "ownership-filter";
    pub const LAST_UPDATED: &str = "last-updated";
    /// Class (not id) carried by every form-type filter button.
    pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
}

/// The display panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PanelKind {
    Opportunities,
    Sectors,
    Filings,
    Trends,
}

impl PanelKind {
    /// Names the fetch in loading and error messages.
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Opportunities => "trading opportunities",
            Self::Sectors => "sector activity",
            Self::Filings => "recent filings",
            Self::Trends => "form type trends",
        }
    }

    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::Opportunities => "No trading opportunities found",
            Self::Sectors => "No sector activity data available",
            Self::Filings => "No recent filings found",
            Self::Trends => "No form type trends available",
        }
    }

    pub const fn container_id(self) -> &'static str {
        match self {
            Self::Opportunities => ids::OPPORTUNITIES,
            Self::Sectors => ids::SECTORS,
            Self::Filings => ids::FILINGS,
            Self::Trends => ids::TRENDS,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Opportunities => "Trading Opportunities",
            Self::Sectors => "Sector Activity",
            Self::Filings => "Recent Filings",
            Self::Trends => "Form Type Trends",
        }
    }
}

/// Connection indicator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum ConnectionState {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

/// Status dot and its caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIndicator {
    pub state: ConnectionState,
    pub text: String,
}

impl StatusIndicator {
    /// Caption shown whenever the health check fails, whatever the cause.
    pub const DISCONNECTED_TEXT: &'static str = "Connection failed";

    pub fn connected(health: &HealthStatus) -> Self {
        let text = match &health.version {
            Some(v) if !v.is_empty() => format!("Connected ({}, v{v})", health.status),
            _ => format!("Connected ({})", health.status),
        };
        Self {
            state: ConnectionState::Connected,
            text,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            text: Self::DISCONNECTED_TEXT.into(),
        }
    }

    /// Classes of the status dot element.
    pub fn dot_class(&self) -> &'static str {
        match self.state {
            ConnectionState::Unknown => "status-dot",
            ConnectionState::Connected => "status-dot connected",
            ConnectionState::Disconnected => "status-dot disconnected",
        }
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self {
            state: ConnectionState::Unknown,
            text: "Checking connection...".into(),
        }
    }
}

/// Lifecycle of one panel's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PanelState {
    Loading,
    Loaded,
    Error,
}

/// A panel container and its current content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub state: PanelState,
    pub html: String,
}

impl Panel {
    pub fn loading(kind: PanelKind) -> Self {
        Self {
            kind,
            state: PanelState::Loading,
            html: render::loading(kind),
        }
    }

    pub(crate) fn set_loading(&mut self) {
        self.state = PanelState::Loading;
        self.html = render::loading(self.kind);
    }

    pub(crate) fn set_loaded(&mut self, html: String) {
        self.state = PanelState::Loaded;
        self.html = html;
    }

    pub(crate) fn set_error(&mut self, err: &impl std::fmt::Display) {
        self.state = PanelState::Error;
        self.html = render::error(self.kind, err);
    }
}

/// The four stat values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub total_companies: String,
    pub total_filings: String,
    pub active_opportunities: String,
    pub total_value: String,
}

impl StatsView {
    pub const UNAVAILABLE: &'static str = "--";
}

impl Default for StatsView {
    fn default() -> Self {
        Self {
            total_companies: Self::UNAVAILABLE.into(),
            total_filings: Self::UNAVAILABLE.into(),
            active_opportunities: Self::UNAVAILABLE.into(),
            total_value: Self::UNAVAILABLE.into(),
        }
    }
}

/// A form-type filter button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    #[serde(serialize_with = "serialize_filter")]
    pub filter: FormFilter,
    pub active: bool,
}

fn serialize_filter<S: serde::Serializer>(f: &FormFilter, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(f.as_attr())
}

/// Refresh button, ownership input and the filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// Raw text of the ownership-threshold input.
    pub min_ownership: String,
    pub form_filters: Vec<FilterButton>,
}

impl Controls {
    /// Marks exactly one filter active, adding a button for a filter the bar lacks.
    pub fn select(&mut self, filter: &FormFilter) {
        let mut found = false;
        for b in &mut self.form_filters {
            b.active = b.filter == *filter;
            found |= b.active;
        }
        if !found {
            self.form_filters.push(FilterButton {
                filter: filter.clone(),
                active: true,
            });
        }
    }

    /// The active filter; `All` when none is marked.
    pub fn active_filter(&self) -> FormFilter {
        self.form_filters
            .iter()
            .find(|b| b.active)
            .map_or(FormFilter::All, |b| b.filter.clone())
    }
}

/// In-memory mirror of the dashboard document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub status: StatusIndicator,
    pub stats: StatsView,
    pub opportunities: Panel,
    pub sectors: Panel,
    pub filings: Panel,
    /// Present only when the trends panel is enabled.
    pub trends: Option<Panel>,
    pub controls: Controls,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Page {
    /// A freshly loaded page: status unknown, every panel loading, the first filter active.
    pub fn new(form_filters: Vec<FormFilter>, min_ownership: &str, with_trends: bool) -> Self {
        let form_filters = form_filters
            .into_iter()
            .enumerate()
            .map(|(i, filter)| FilterButton {
                filter,
                active: i == 0,
            })
            .collect();
        Self {
            status: StatusIndicator::default(),
            stats: StatsView::default(),
            opportunities: Panel::loading(PanelKind::Opportunities),
            sectors: Panel::loading(PanelKind::Sectors),
            filings: Panel::loading(PanelKind::Filings),
            trends: with_trends.then(|| Panel::loading(PanelKind::Trends)),
            controls: Controls {
                min_ownership: min_ownership.to_string(),
                form_filters,
            },
            last_updated: None,
        }
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        match kind {
            PanelKind::Opportunities => Some(&self.opportunities),
            PanelKind::Sectors => Some(&self.sectors),
            PanelKind::Filings => Some(&self.filings),
            PanelKind::Trends => self.trends.as_ref(),
        }
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> Option<&mut Panel> {
        match kind {
            PanelKind::Opportunities => Some(&mut self.opportunities),
            PanelKind::Sectors => Some(&mut self.sectors),
            PanelKind::Filings => Some(&mut self.filings),
            PanelKind::Trends => self.trends.as_mut(),
        }
    }

    /// Text or inner HTML of the element with DOM id `id`.
    pub fn element(&self, id: &str) -> Option<&str> {
        let s: &String = match id {
            ids::STATUS_TEXT => &self.status.text,
            ids::TOTAL_COMPANIES => &self.stats.total_companies,
            ids::TOTAL_FILINGS => &self.stats.total_filings,
            ids::ACTIVE_OPPORTUNITIES => &self.stats.active_opportunities,
            ids::TOTAL_VALUE => &self.stats.total_value,
            ids::OWNERSHIP_FILTER => &self.controls.min_ownership,
            ids::OPPORTUNITIES => &self.opportunities.html,
            ids::SECTORS => &self.sectors.html,
            ids::FILINGS => &self.filings.html,
            ids::TRENDS => &self.trends.as_ref()?.html,
            _ => return None,
        };
        Some(s.as_str())
    }
}
