use std::fmt::Write;

use url::Url;

use super::{css_token, escape_html, or_fallback, placeholder};
use crate::filings::Filing;
use crate::format::{format_date, format_number, format_plain};
use crate::page::PanelKind;

/// A table with one row per filing.
pub fn render_filings(filings: &[Filing]) -> String {
    if filings.is_empty() {
        return placeholder(PanelKind::Filings);
    }
    let mut html = String::from(
        r#"<table class="filings-table">
    <thead>
        <tr><th>Company</th><th>Owner</th><th>Form</th><th>Ownership</th><th>Shares</th><th>Filed</th></tr>
    </thead>
    <tbody>
"#,
    );
    for f in filings {
        let company = f
            .company_id
            .map_or_else(|| "N/A".to_string(), |id| format!("Company #{id}"));
        let owner = or_fallback(&f.owner_name, "Unknown");
        let owner = match f.url.as_deref().and_then(web_link) {
            Some(href) => format!(
                r#"<a href="{}" target="_blank" rel="noopener">{owner}</a>"#,
                escape_html(href.as_str())
            ),
            None => owner,
        };
        let _ = writeln!(
            html,
            r#"        <tr><td>{company}</td><td>{owner}</td><td><span class="form-badge form-{form_class}">{form}</span></td><td>{pct}%</td><td>{shares}</td><td>{date}</td></tr>"#,
            form_class = css_token(&f.form_type),
            form = or_fallback(&f.form_type, "N/A"),
            pct = format_plain(f.ownership_percent),
            shares = format_number(f.shares_owned),
            date = escape_html(&format_date(&f.filing_date)),
        );
    }
    html.push_str("    </tbody>\n</table>\n");
    html
}

/// Only absolute `http`/`https` URLs become links.
fn web_link(raw: &str) -> Option<Url> {
    Url::parse(raw.trim())
        .ok()
        .filter(|u| matches!(u.scheme(), "http" | "https"))
}
