mod api;
mod model;
pub(crate) mod wire;

pub use model::{Filing, FilingsPage};

use std::fmt;

use crate::core::{DashClient, DashError, client::RetryConfig};

/// Which form types the filings listing is restricted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FormFilter {
    /// No restriction; the `form_type` parameter is omitted.
    #[default]
    All,
    /// Only filings of this form type (e.g. `13D`).
    Form(String),
}

impl FormFilter {
    /// Shorthand for [`FormFilter::Form`].
    pub fn form(form_type: impl Into<String>) -> Self {
        Self::Form(form_type.into())
    }

    /// Parses a filter button's `data-form-type` attribute. `all` (any case) and
    /// an empty value select [`FormFilter::All`].
    pub fn from_attr(attr: &str) -> Self {
        let attr = attr.trim();
        if attr.is_empty() || attr.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Form(attr.to_string())
        }
    }

    /// The value of the `data-form-type` attribute for this filter.
    pub fn as_attr(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Form(f) => f,
        }
    }

    /// The `form_type` query value, if any.
    pub fn as_query(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Form(f) => Some(f),
        }
    }

    /// The standard filter bar: All, 13D, 13G, 13G/A.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::All,
            Self::form("13D"),
            Self::form("13G"),
            Self::form("13G/A"),
        ]
    }
}

impl fmt::Display for FormFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Form(form) => f.write_str(form),
        }
    }
}

/// Sort direction for the filings listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest / smallest first.
    Asc,
    /// Newest / largest first.
    #[default]
    Desc,
}

impl SortOrder {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Parameters of a filings listing request.
#[derive(Debug, Clone, PartialEq)]
pub struct FilingsQuery {
    /// Lookback window in days; omitted from the query when `None`.
    pub days_back: Option<u32>,
    /// Maximum number of filings to return.
    pub limit: u32,
    /// Sort field; `order` is only sent alongside it.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub order: SortOrder,
    /// Form-type restriction.
    pub form_type: FormFilter,
}

impl Default for FilingsQuery {
    fn default() -> Self {
        Self {
            days_back: None,
            limit: 100,
            sort_by: None,
            order: SortOrder::Desc,
            form_type: FormFilter::All,
        }
    }
}

/// A builder for fetching the filings listing.
#[derive(Clone)]
pub struct FilingsBuilder {
    client: DashClient,
    query: FilingsQuery,
    retry_override: Option<RetryConfig>,
}

impl FilingsBuilder {
    /// Creates a new `FilingsBuilder` with the server's defaults.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            query: FilingsQuery::default(),
            retry_override: None,
        }
    }

    /// Replaces every parameter at once.
    #[must_use]
    pub fn query(mut self, query: FilingsQuery) -> Self {
        self.query = query;
        self
    }

    /// Restricts the listing to filings from the last `days` days.
    #[must_use]
    pub const fn days_back(mut self, days: u32) -> Self {
        self.query.days_back = Some(days);
        self
    }

    /// Sets the maximum number of filings to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.query.limit = limit;
        self
    }

    /// Sorts by `field` in the given order.
    #[must_use]
    pub fn sort_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.query.sort_by = Some(field.into());
        self.query.order = order;
        self
    }

    /// Restricts the listing to one form type.
    #[must_use]
    pub fn form_type(mut self, filter: FormFilter) -> Self {
        self.query.form_type = filter;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the request fails, the server answers with a
    /// non-success status, or the body is not a filings listing.
    #[tracing::instrument(skip(self), err, fields(form_type = %self.query.form_type))]
    pub async fn fetch(self) -> Result<FilingsPage, DashError> {
        api::fetch_filings(&self.client, &self.query, self.retry_override.as_ref()).await
    }
}

impl DashClient {
    /// Starts a filings listing request.
    pub fn filings(&self) -> FilingsBuilder {
        FilingsBuilder::new(self)
    }
}
