use serde::Serialize;

use crate::core::wire::{count, num, text};
use crate::filings::wire::FilingNode;

/// A single 13D/13G ownership disclosure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filing {
    /// The server's opaque company key, when present.
    pub company_id: Option<i64>,
    /// Name of the reporting owner.
    pub owner_name: String,
    /// SEC form type, e.g. `13D`, `13G`, `13G/A`.
    pub form_type: String,
    /// Percent of the class owned (e.g. `7.5` for 7.5%).
    pub ownership_percent: f64,
    /// Number of shares beneficially owned.
    pub shares_owned: f64,
    /// Filing date as sent by the server (ISO-8601 date or date-time).
    pub filing_date: String,
    /// EDGAR accession number.
    pub accession_number: Option<String>,
    /// Link to the filing on EDGAR.
    pub url: Option<String>,
}

impl From<FilingNode> for Filing {
    fn from(n: FilingNode) -> Self {
        Self {
            company_id: n.company_id,
            owner_name: text(n.owner_name),
            form_type: text(n.form_type),
            ownership_percent: num(n.ownership_percent),
            shares_owned: num(n.shares_owned),
            filing_date: text(n.filing_date),
            accession_number: n.accession_number.filter(|s| !s.is_empty()),
            url: n.url.filter(|s| !s.is_empty()),
        }
    }
}

/// One page of the filings listing.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FilingsPage {
    /// The filings on this page, in server order.
    pub filings: Vec<Filing>,
    /// Total number of filings matching the query, when the server reports one.
    /// A bare-array response carries no total.
    pub total: Option<u64>,
}

impl FilingsPage {
    pub(crate) fn from_parts(nodes: Vec<FilingNode>, total: Option<i64>) -> Self {
        Self {
            filings: nodes.into_iter().map(Filing::from).collect(),
            total: total.map(|t| count(Some(t))),
        }
    }
}
