//! Whole-document serialisation of a [`Page`].
//!
//! Panel containers carry their current fragments verbatim; the stats, the
//! status caption and the controls are escaped here.

use std::fmt::Write;

use super::{Page, Panel, ids};
use crate::format::format_time;
use crate::render::escape_html;

const STYLES: &str = r#"
        :root { --bg: #0f172a; --card: #1e293b; --text: #e2e8f0; --dim: #94a3b8; --green: #22c55e; --red: #ef4444; --amber: #f59e0b; }
        body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: var(--bg); color: var(--text); }
        .container { max-width: 1200px; margin: 0 auto; padding: 24px; }
        header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 24px; }
        .status { display: flex; align-items: center; gap: 8px; color: var(--dim); }
        .status-dot { width: 10px; height: 10px; border-radius: 50%; background: var(--dim); }
        .status-dot.connected { background: var(--green); }
        .status-dot.disconnected { background: var(--red); }
        .stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 24px; }
        .stat-card, .panel { background: var(--card); border-radius: 12px; padding: 16px; }
        .stat-value { font-size: 1.8em; font-weight: 700; }
        .stat-label { color: var(--dim); font-size: 0.85em; }
        .panels { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; }
        .panel.wide { grid-column: 1 / -1; }
        .filter-btn.active { background: var(--green); color: var(--bg); }
        .signal-strong { color: var(--green); } .signal-moderate { color: var(--amber); } .signal-weak { color: var(--dim); }
        .error { color: var(--red); padding: 12px; }
        .empty-state, .loading { color: var(--dim); padding: 12px; text-align: center; }
        .filings-table { width: 100%; border-collapse: collapse; }
        .filings-table th, .filings-table td { padding: 8px; border-bottom: 1px solid #334155; text-align: left; }
"#;

/// Serialises the page into a complete HTML document.
pub fn render_document(page: &Page) -> String {
    let mut body = String::new();

    let updated = page
        .last_updated
        .map_or_else(|| "Never".to_string(), format_time);
    let _ = write!(
        body,
        r#"    <div class="container">
        <header>
            <div>
                <h1>SEC Filings Dashboard</h1>
                <span class="refresh-time">Updated: <span id="{last_updated_id}">{updated}</span></span>
            </div>
            <div class="status">
                <span class="{dot_class}" id="{dot_id}"></span>
                <span id="{text_id}">{status_text}</span>
                <button class="btn" id="{refresh_id}">Refresh</button>
            </div>
        </header>
        <section class="stats">
"#,
        last_updated_id = ids::LAST_UPDATED,
        dot_class = page.status.dot_class(),
        dot_id = ids::STATUS_DOT,
        text_id = ids::STATUS_TEXT,
        status_text = escape_html(&page.status.text),
        refresh_id = ids::REFRESH_BUTTON,
    );

    for (id, label, value) in [
        (ids::TOTAL_COMPANIES, "Companies Tracked", &page.stats.total_companies),
        (ids::TOTAL_FILINGS, "Total Filings", &page.stats.total_filings),
        (ids::ACTIVE_OPPORTUNITIES, "Active Opportunities", &page.stats.active_opportunities),
        (ids::TOTAL_VALUE, "Total Position Value", &page.stats.total_value),
    ] {
        let _ = writeln!(
            body,
            r#"            <div class="stat-card"><div class="stat-value" id="{id}">{}</div><div class="stat-label">{label}</div></div>"#,
            escape_html(value)
        );
    }
    body.push_str("        </section>\n        <section class=\"panels\">\n");

    let ownership_control = format!(
        r#"<label>Min ownership % <input type="number" step="0.5" min="0" id="{}" value="{}"></label>"#,
        ids::OWNERSHIP_FILTER,
        escape_html(&page.controls.min_ownership)
    );
    panel(&mut body, &page.opportunities, "", &ownership_control);
    panel(&mut body, &page.sectors, "", "");

    let mut filter_bar = String::from(r#"<div class="filters">"#);
    for b in &page.controls.form_filters {
        let _ = write!(
            filter_bar,
            r#"<button class="{}{}" data-form-type="{}">{}</button>"#,
            ids::FILTER_BUTTON_CLASS,
            if b.active { " active" } else { "" },
            escape_html(b.filter.as_attr()),
            escape_html(&b.filter.to_string()),
        );
    }
    filter_bar.push_str("</div>");
    panel(&mut body, &page.filings, " wide", &filter_bar);

    if let Some(trends) = &page.trends {
        panel(&mut body, trends, " wide", "");
    }
    body.push_str("        </section>\n    </div>\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>SEC Filings Dashboard</title>
    <style>
{STYLES}
    </style>
</head>
<body>
{body}</body>
</html>"#
    )
}

fn panel(out: &mut String, panel: &Panel, extra_class: &str, controls: &str) {
    let _ = write!(
        out,
        r#"            <div class="panel{extra_class}">
                <div class="panel-header"><h2>{title}</h2>{controls}</div>
                <div id="{id}">
{html}
                </div>
            </div>
"#,
        title = panel.kind.title(),
        id = panel.kind.container_id(),
        html = panel.html,
    );
}
