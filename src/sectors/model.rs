use serde::Serialize;

use crate::core::wire::{count, num, text};
use crate::sectors::wire::SectorNode;

/// Filing statistics for one industry sector over the lookback window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorActivity {
    pub sector: String,
    pub filing_count: u64,
    pub total_shares_tracked: f64,
    /// Mean ownership percent across the sector's filings.
    pub average_ownership: f64,
    /// Server-computed activity score.
    pub activity_score: f64,
}

impl From<SectorNode> for SectorActivity {
    fn from(n: SectorNode) -> Self {
        Self {
            sector: text(n.sector),
            filing_count: count(n.filing_count),
            total_shares_tracked: num(n.total_shares_tracked),
            average_ownership: num(n.average_ownership),
            activity_score: num(n.activity_score),
        }
    }
}
