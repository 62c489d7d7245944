use std::fmt::Write;

use super::{or_fallback, placeholder};
use crate::format::{format_number, to_fixed};
use crate::page::PanelKind;
use crate::sectors::SectorActivity;

/// One row per sector, in server order.
pub fn render_sectors(sectors: &[SectorActivity]) -> String {
    if sectors.is_empty() {
        return placeholder(PanelKind::Sectors);
    }
    let mut html = String::new();
    for s in sectors {
        let _ = write!(
            html,
            r#"<div class="sector-item">
    <div class="sector-header">
        <span class="sector-name">{name}</span>
        <span class="activity-score">{score}</span>
    </div>
    <div class="sector-stats">
        <span class="sector-stat">{count} filings</span>
        <span class="sector-stat">{shares} shares</span>
        <span class="sector-stat">{avg}% avg ownership</span>
    </div>
</div>
"#,
            name = or_fallback(&s.sector, "Unknown"),
            score = to_fixed(s.activity_score, 1),
            count = s.filing_count,
            shares = format_number(s.total_shares_tracked),
            avg = to_fixed(s.average_ownership, 1),
        );
    }
    html
}
