use std::sync::Arc;

use serde::Serialize;

use crate::filings::Filing;
use crate::opportunities::{Opportunity, total_position_value};
use crate::page::{Page, PanelKind};
use crate::sectors::SectorActivity;
use crate::trends::FormTrend;

/// The last successfully fetched collections.
///
/// Each collection is replaced wholesale; snapshots share the vectors.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientState {
    pub opportunities: Arc<Vec<Opportunity>>,
    pub sectors: Arc<Vec<SectorActivity>>,
    pub filings: Arc<Vec<Filing>>,
    pub trends: Arc<Vec<FormTrend>>,
    /// Latest `total` from the companies listing.
    pub companies_total: Option<u64>,
    /// Latest `total` from the filings listing.
    pub filings_total: Option<u64>,
}

impl ClientState {
    /// Sum of every cached opportunity's estimated position value.
    pub fn total_position_value(&self) -> f64 {
        total_position_value(&self.opportunities)
    }
}

/// Request tickets per section; a response is applied only if its ticket is still the newest.
#[derive(Debug, Default)]
pub(crate) struct Generations {
    opportunities: u64,
    sectors: u64,
    filings: u64,
    trends: u64,
    stats: u64,
}

/// What a ticket is for: one of the panels, or the stats totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Panel(PanelKind),
    Stats,
}

impl Generations {
    fn slot(&mut self, section: Section) -> &mut u64 {
        match section {
            Section::Panel(PanelKind::Opportunities) => &mut self.opportunities,
            Section::Panel(PanelKind::Sectors) => &mut self.sectors,
            Section::Panel(PanelKind::Filings) => &mut self.filings,
            Section::Panel(PanelKind::Trends) => &mut self.trends,
            Section::Stats => &mut self.stats,
        }
    }

    pub(crate) fn issue(&mut self, section: Section) -> u64 {
        let slot = self.slot(section);
        *slot += 1;
        *slot
    }

    pub(crate) fn is_current(&mut self, section: Section, ticket: u64) -> bool {
        *self.slot(section) == ticket
    }
}

/// Everything guarded by the dashboard's lock.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) state: ClientState,
    pub(crate) page: Page,
    pub(crate) generations: Generations,
}
