//! The dashboard controller.
//!
//! A [`Dashboard`] owns the last-fetched collections ([`ClientState`]) and the
//! page they are rendered into ([`Page`]). A refresh cycle fans out one request
//! per panel plus the two total-count requests; each panel is re-rendered as soon as
//! its own response lands, and a failure only ever touches the panel it
//! belongs to. User input arrives as [`UiEvent`]s.

mod config;
mod state;
mod task;

pub use config::DashboardConfig;
pub use state::ClientState;
pub use task::RefreshTask;

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use chrono::Utc;
use tokio::{
    sync::{RwLock, oneshot},
    time::{Instant, MissedTickBehavior},
};
use tracing::{debug, info, warn};

use crate::core::{DashClient, DashError};
use crate::filings::{FilingsQuery, FormFilter};
use crate::format::format_currency;
use crate::page::{Page, PanelKind, PanelState, StatsView, StatusIndicator};
use crate::render;
use state::{Generations, Section, Shared};

/// Input from the page.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The refresh button was clicked.
    Refresh,
    /// The ownership input changed; carries its raw text.
    MinOwnershipChanged(String),
    /// A form-type filter button was clicked.
    FormTypeSelected(FormFilter),
}

/// Result of applying one section's response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The response was applied; carries the number of records.
    Loaded(usize),
    /// The fetch failed and the section shows an error. Carries the message.
    Failed(String),
    /// A newer request for the same section was issued; the response was dropped.
    Superseded,
}

impl SectionOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }
}

/// Per-section results of one refresh cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub opportunities: SectionOutcome,
    pub sectors: SectionOutcome,
    pub filings: SectionOutcome,
    pub stats: SectionOutcome,
    /// `None` when the trends panel is disabled.
    pub trends: Option<SectionOutcome>,
}

impl RefreshReport {
    /// Whether every section that was fetched loaded.
    pub fn all_loaded(&self) -> bool {
        [&self.opportunities, &self.sectors, &self.filings, &self.stats]
            .into_iter()
            .chain(self.trends.as_ref())
            .all(SectionOutcome::is_loaded)
    }
}

/// What [`Dashboard::refresh`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed(RefreshReport),
    /// Another cycle was still in flight; nothing was requested.
    Skipped,
}

/// What [`Dashboard::init`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub connected: bool,
    pub refresh: RefreshOutcome,
}

/// What [`Dashboard::dispatch`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Refreshed(RefreshOutcome),
    Opportunities(SectionOutcome),
    Filings(SectionOutcome),
}

struct Inner {
    client: DashClient,
    config: DashboardConfig,
    shared: RwLock<Shared>,
    in_flight: AtomicBool,
}

/// Marks a refresh cycle as running; clears the mark when dropped, even on abort.
struct CycleGuard<'a>(&'a AtomicBool);

impl<'a> CycleGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The dashboard controller. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("base_url", &self.inner.client.base_url().as_str())
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Dashboard`].
pub struct DashboardBuilder {
    client: DashClient,
    config: DashboardConfig,
}

impl DashboardBuilder {
    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn refresh_interval(mut self, every: Duration) -> Self {
        self.config.refresh_interval = every;
        self
    }

    #[must_use]
    pub const fn default_min_ownership(mut self, percent: f64) -> Self {
        self.config.default_min_ownership = percent;
        self
    }

    #[must_use]
    pub const fn filings_limit(mut self, limit: u32) -> Self {
        self.config.filings_limit = limit;
        self
    }

    #[must_use]
    pub fn form_filters(mut self, filters: Vec<FormFilter>) -> Self {
        self.config.form_filters = filters;
        self
    }

    /// Adds the form-type trends panel.
    #[must_use]
    pub const fn with_form_trends(mut self, enabled: bool) -> Self {
        self.config.include_form_trends = enabled;
        self
    }

    /// Builds the dashboard with every panel in its loading state.
    ///
    /// # Errors
    ///
    /// Returns `DashError::InvalidParams` for a zero refresh interval, a
    /// non-positive default threshold or an empty filter bar.
    pub fn build(self) -> Result<Dashboard, DashError> {
        let cfg = self.config;
        if cfg.refresh_interval.is_zero() {
            return Err(DashError::InvalidParams(
                "refresh interval must be non-zero".into(),
            ));
        }
        if !(cfg.default_min_ownership.is_finite() && cfg.default_min_ownership > 0.0) {
            return Err(DashError::InvalidParams(format!(
                "default ownership threshold must be positive, got {}",
                cfg.default_min_ownership
            )));
        }
        if cfg.form_filters.is_empty() {
            return Err(DashError::InvalidParams(
                "at least one form-type filter is required".into(),
            ));
        }

        let page = Page::new(
            cfg.form_filters.clone(),
            &cfg.min_ownership_input(),
            cfg.include_form_trends,
        );
        Ok(Dashboard {
            inner: Arc::new(Inner {
                client: self.client,
                config: cfg,
                shared: RwLock::new(Shared {
                    state: ClientState::default(),
                    page,
                    generations: Generations::default(),
                }),
                in_flight: AtomicBool::new(false),
            }),
        })
    }
}

impl Dashboard {
    pub fn builder(client: &DashClient) -> DashboardBuilder {
        DashboardBuilder {
            client: client.clone(),
            config: DashboardConfig::default(),
        }
    }

    pub fn client(&self) -> &DashClient {
        &self.inner.client
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// A snapshot of the page.
    pub async fn page(&self) -> Page {
        self.inner.shared.read().await.page.clone()
    }

    /// A snapshot of the cached collections.
    pub async fn state(&self) -> ClientState {
        self.inner.shared.read().await.state.clone()
    }

    /// The page as a complete HTML document.
    pub async fn render_document(&self) -> String {
        crate::page::render_document(&self.inner.shared.read().await.page)
    }

    /// Whether a refresh cycle is currently running.
    pub fn is_refreshing(&self) -> bool {
        self.inner.in_flight.load(Ordering::Acquire)
    }

    /// Checks health, then runs the first refresh cycle whatever the check said.
    pub async fn init(&self) -> InitReport {
        let connected = self.check_health().await;
        let refresh = self.refresh().await;
        InitReport { connected, refresh }
    }

    /// Calls `/health` and updates the connection indicator.
    ///
    /// Any failure shows the generic disconnected caption; the cause is only logged.
    pub async fn check_health(&self) -> bool {
        let result = self.inner.client.health().await;
        let mut shared = self.inner.shared.write().await;
        match result {
            Ok(health) => {
                debug!(status = %health.status, version = ?health.version, "API healthy");
                shared.page.status = StatusIndicator::connected(&health);
                true
            }
            Err(e) => {
                warn!(error = %e, "health check failed");
                shared.page.status = StatusIndicator::disconnected();
                false
            }
        }
    }

    /// Runs one refresh cycle: opportunities, sectors, filings (under the
    /// active form filter), the stats totals and, when enabled, form trends,
    /// all concurrently.
    ///
    /// Returns [`RefreshOutcome::Skipped`] without issuing any request if a
    /// cycle is already running.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(_guard) = CycleGuard::acquire(&self.inner.in_flight) else {
            debug!("refresh already in flight; skipping");
            return RefreshOutcome::Skipped;
        };

        let with_trends = self.inner.config.include_form_trends;

        let (opportunities, sectors, filings, stats, trends) = futures::join!(
            self.load_opportunities(None),
            self.load_sectors(),
            self.load_filings(None),
            self.load_stats_totals(),
            async {
                if with_trends {
                    Some(self.load_trends().await)
                } else {
                    None
                }
            }
        );

        {
            let mut shared = self.inner.shared.write().await;
            refresh_derived_stats(&mut shared);
            shared.page.last_updated = Some(Utc::now());
        }

        let report = RefreshReport {
            opportunities,
            sectors,
            filings,
            stats,
            trends,
        };
        if report.all_loaded() {
            info!("refresh cycle complete");
        } else {
            info!(?report, "refresh cycle complete with failures");
        }
        RefreshOutcome::Completed(report)
    }

    /// Makes `filter` the only active filter and re-fetches the filings panel.
    /// Nothing else is re-fetched.
    pub async fn select_form_type(&self, filter: FormFilter) -> SectionOutcome {
        self.load_filings(Some(filter)).await
    }

    /// Stores the raw ownership input and re-fetches the opportunities panel.
    /// Empty, invalid and zero inputs query with the default threshold.
    pub async fn set_min_ownership(&self, raw: impl Into<String>) -> SectionOutcome {
        let outcome = self.load_opportunities(Some(raw.into())).await;
        refresh_derived_stats(&mut *self.inner.shared.write().await);
        outcome
    }

    /// Routes one page event.
    pub async fn dispatch(&self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::Refresh => EventOutcome::Refreshed(self.refresh().await),
            UiEvent::MinOwnershipChanged(raw) => {
                EventOutcome::Opportunities(self.set_min_ownership(raw).await)
            }
            UiEvent::FormTypeSelected(filter) => {
                EventOutcome::Filings(self.select_form_type(filter).await)
            }
        }
    }

    /// Spawns the repeating refresh. The first tick fires one interval from now.
    ///
    /// A tick that arrives while a cycle is still running is skipped rather
    /// than queued.
    pub fn start(&self) -> RefreshTask {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let dash = self.clone();
        let period = self.inner.config.refresh_interval;

        let join = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // A dropped handle closes the channel without asking the task to stop.
            let mut handle_alive = true;
            loop {
                tokio::select! {
                    biased;
                    signal = &mut stop_rx, if handle_alive => {
                        if signal.is_ok() {
                            debug!("refresh task stopped");
                            break;
                        }
                        handle_alive = false;
                    }
                    _ = ticker.tick() => {
                        if dash.refresh().await == RefreshOutcome::Skipped {
                            debug!("scheduled refresh skipped");
                        }
                    }
                }
            }
        });

        RefreshTask {
            join,
            stop_tx: Some(stop_tx),
        }
    }

    /* ---------------- per-section loads ---------------- */

    async fn begin(&self, section: Section) -> PendingLoad {
        self.begin_with(section, |_| ()).await.0
    }

    /// Marks `section` loading and issues its ticket. `read` runs under the
    /// same lock, so the request inputs it returns belong to that ticket.
    async fn begin_with<T>(
        &self,
        section: Section,
        read: impl FnOnce(&mut Shared) -> T,
    ) -> (PendingLoad, T) {
        let mut shared = self.inner.shared.write().await;
        let input = read(&mut *shared);
        if let Section::Panel(kind) = section
            && let Some(panel) = shared.page.panel_mut(kind)
        {
            panel.set_loading();
        }
        let pending = PendingLoad {
            inner: Arc::clone(&self.inner),
            section,
            ticket: shared.generations.issue(section),
            settled: false,
        };
        (pending, input)
    }

    /// `input` replaces the stored ownership text before the threshold is read.
    async fn load_opportunities(&self, input: Option<String>) -> SectionOutcome {
        let section = Section::Panel(PanelKind::Opportunities);
        let cfg = &self.inner.config;
        let (pending, threshold) = self
            .begin_with(section, |shared| {
                if let Some(raw) = input {
                    shared.page.controls.min_ownership = raw;
                }
                cfg.parse_min_ownership(&shared.page.controls.min_ownership)
            })
            .await;
        let result = self
            .inner
            .client
            .opportunities()
            .min_ownership(threshold)
            .days_back(cfg.opportunities_days_back)
            .fetch()
            .await;

        let mut shared = self.inner.shared.write().await;
        if !shared.generations.is_current(section, pending.settle()) {
            return superseded(section);
        }
        match result {
            Ok(list) => {
                let n = list.len();
                shared.page.opportunities.set_loaded(render::render_opportunities(&list));
                shared.state.opportunities = Arc::new(list);
                SectionOutcome::Loaded(n)
            }
            Err(e) => failed(&mut shared, PanelKind::Opportunities, &e),
        }
    }

    async fn load_sectors(&self) -> SectionOutcome {
        let section = Section::Panel(PanelKind::Sectors);
        let pending = self.begin(section).await;
        let result = self
            .inner
            .client
            .sector_activity()
            .days_back(self.inner.config.sector_days_back)
            .fetch()
            .await;

        let mut shared = self.inner.shared.write().await;
        if !shared.generations.is_current(section, pending.settle()) {
            return superseded(section);
        }
        match result {
            Ok(list) => {
                let n = list.len();
                shared.page.sectors.set_loaded(render::render_sectors(&list));
                shared.state.sectors = Arc::new(list);
                SectionOutcome::Loaded(n)
            }
            Err(e) => failed(&mut shared, PanelKind::Sectors, &e),
        }
    }

    /// `select` becomes the active filter before the filter is read.
    async fn load_filings(&self, select: Option<FormFilter>) -> SectionOutcome {
        let section = Section::Panel(PanelKind::Filings);
        let (pending, filter) = self
            .begin_with(section, |shared| {
                if let Some(f) = &select {
                    shared.page.controls.select(f);
                }
                shared.page.controls.active_filter()
            })
            .await;
        let cfg = &self.inner.config;
        let query = FilingsQuery {
            days_back: Some(cfg.filings_days_back),
            limit: cfg.filings_limit,
            sort_by: Some(cfg.filings_sort_by.clone()),
            order: cfg.filings_order,
            form_type: filter,
        };
        let result = self.inner.client.filings().query(query).fetch().await;

        let mut shared = self.inner.shared.write().await;
        if !shared.generations.is_current(section, pending.settle()) {
            return superseded(section);
        }
        match result {
            Ok(page) => {
                let n = page.filings.len();
                shared.page.filings.set_loaded(render::render_filings(&page.filings));
                shared.state.filings = Arc::new(page.filings);
                SectionOutcome::Loaded(n)
            }
            Err(e) => failed(&mut shared, PanelKind::Filings, &e),
        }
    }

    async fn load_trends(&self) -> SectionOutcome {
        let section = Section::Panel(PanelKind::Trends);
        let pending = self.begin(section).await;
        let result = self
            .inner
            .client
            .form_trends()
            .days_back(self.inner.config.trends_days_back)
            .fetch()
            .await;

        let mut shared = self.inner.shared.write().await;
        if !shared.generations.is_current(section, pending.settle()) {
            return superseded(section);
        }
        match result {
            Ok(list) => {
                let n = list.len();
                if let Some(panel) = shared.page.trends.as_mut() {
                    panel.set_loaded(render::render_trends(&list));
                }
                shared.state.trends = Arc::new(list);
                SectionOutcome::Loaded(n)
            }
            Err(e) => failed(&mut shared, PanelKind::Trends, &e),
        }
    }

    /// Fetches both total counts. Either failing blanks both totals.
    async fn load_stats_totals(&self) -> SectionOutcome {
        let pending = self.begin(Section::Stats).await;
        let limit = self.inner.config.stats_total_limit;
        let count_query = FilingsQuery {
            limit,
            ..FilingsQuery::default()
        };
        let result = futures::try_join!(
            self.inner.client.companies_total(limit, None),
            self.inner.client.filings().query(count_query).fetch(),
        );

        let mut shared = self.inner.shared.write().await;
        if !shared.generations.is_current(Section::Stats, pending.settle()) {
            return superseded(Section::Stats);
        }
        match result {
            Ok((companies, filings)) => {
                if companies.total.is_none() || filings.total.is_none() {
                    debug!("listing returned no total; stat shown as unavailable");
                }
                shared.state.companies_total = companies.total;
                shared.state.filings_total = filings.total;
                SectionOutcome::Loaded(2)
            }
            Err(e) => {
                warn!(error = %e, "statistics totals failed");
                shared.state.companies_total = None;
                shared.state.filings_total = None;
                SectionOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Rewrites the stats strip from the cache: totals from the last count requests,
/// the opportunity count and value sum from the cached opportunities.
fn refresh_derived_stats(shared: &mut Shared) {
    let state = &shared.state;
    let total = |t: Option<u64>| t.map_or_else(|| StatsView::UNAVAILABLE.to_string(), |n| n.to_string());
    shared.page.stats = StatsView {
        total_companies: total(state.companies_total),
        total_filings: total(state.filings_total),
        active_opportunities: state.opportunities.len().to_string(),
        total_value: format_currency(state.total_position_value()),
    };
}

fn failed(shared: &mut Shared, kind: PanelKind, err: &DashError) -> SectionOutcome {
    warn!(error = %err, panel = kind.operation(), "panel load failed");
    if let Some(panel) = shared.page.panel_mut(kind) {
        panel.set_error(err);
    }
    SectionOutcome::Failed(err.to_string())
}

/// A section request between `begin` and applying its response. Dropped
/// unsettled (the load future was cancelled), it takes the panel out of its
/// loading state unless a newer request owns the section.
struct PendingLoad {
    inner: Arc<Inner>,
    section: Section,
    ticket: u64,
    settled: bool,
}

impl PendingLoad {
    /// Called with the lock held, just before the ticket is checked.
    fn settle(mut self) -> u64 {
        self.settled = true;
        self.ticket
    }
}

impl Drop for PendingLoad {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let Ok(rt) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let inner = Arc::clone(&self.inner);
        let (section, ticket) = (self.section, self.ticket);
        rt.spawn(async move {
            let mut shared = inner.shared.write().await;
            if !shared.generations.is_current(section, ticket) {
                return;
            }
            debug!(?section, "request cancelled; clearing loading state");
            if let Section::Panel(kind) = section
                && let Some(panel) = shared.page.panel_mut(kind)
                && panel.state == PanelState::Loading
            {
                panel.set_error(&"request cancelled");
            }
        });
    }
}

fn superseded(section: Section) -> SectionOutcome {
    debug!(?section, "dropping superseded response");
    SectionOutcome::Superseded
}
