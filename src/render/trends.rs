use std::fmt::Write;

use super::{css_token, escape_html, or_fallback, placeholder};
use crate::format::{format_date, to_fixed};
use crate::page::PanelKind;
use crate::trends::FormTrend;

/// One block per form type.
pub fn render_trends(trends: &[FormTrend]) -> String {
    if trends.is_empty() {
        return placeholder(PanelKind::Trends);
    }
    let mut html = String::new();
    for t in trends {
        let _ = write!(
            html,
            r#"<div class="trend-item">
    <div class="trend-header"><span class="form-badge form-{class}">{form}</span><span class="trend-total">{total} filings</span></div>
    <div class="trend-stats">{avg}% avg ownership &middot; latest {latest}</div>
    <p class="trend-interpretation">{interp}</p>
</div>
"#,
            class = css_token(&t.form_type),
            form = or_fallback(&t.form_type, "N/A"),
            total = t.total_filings,
            avg = to_fixed(t.average_ownership, 1),
            latest = or_fallback(&format_date(&t.latest_filing), "N/A"),
            interp = escape_html(&t.interpretation),
        );
    }
    html
}
