use std::fmt::Write;

use super::{escape_html, or_fallback, placeholder};
use crate::format::{format_currency, format_date, format_number, format_plain};
use crate::opportunities::Opportunity;
use crate::page::PanelKind;

/// One card per opportunity, or the placeholder when there are none.
pub fn render_opportunities(opportunities: &[Opportunity]) -> String {
    if opportunities.is_empty() {
        return placeholder(PanelKind::Opportunities);
    }
    let mut html = String::new();
    for opp in opportunities {
        card(&mut html, opp);
    }
    html
}

fn card(out: &mut String, opp: &Opportunity) {
    let Opportunity {
        filing,
        company,
        analysis,
    } = opp;
    let signal = &analysis.signal_strength;
    let stance = if analysis.is_activist_form { "Activist" } else { "Passive" };

    let _ = write!(
        out,
        r#"<div class="opportunity-card">
    <div class="opportunity-header">
        <div class="company-info">
            <h3 class="company-name">{name}</h3>
            <span class="company-ticker">{ticker}</span>
            <span class="company-sector">{sector}</span>
        </div>
        <span class="signal-badge signal-{signal_class}">{signal_label}</span>
    </div>
    <div class="opportunity-details">
"#,
        name = or_fallback(&company.name, "Unknown Company"),
        ticker = or_fallback(&company.ticker, "N/A"),
        sector = or_fallback(&company.sector, "Unknown"),
        signal_class = signal.css_suffix(),
        signal_label = escape_html(signal.label()),
    );
    detail(out, "Owner", &or_fallback(&filing.owner_name, "Unknown"));
    detail(out, "Ownership", &format!("{}%", format_plain(filing.ownership_percent)));
    detail(out, "Shares", &format_number(filing.shares_owned));
    detail(out, "Est. Value", &format_currency(analysis.estimated_position_value));
    detail(
        out,
        "Form",
        &format!("{} ({stance})", or_fallback(&filing.form_type, "N/A")),
    );
    detail(
        out,
        "Filed",
        &format!(
            "{} ({} days ago)",
            escape_html(&format_date(&filing.filing_date)),
            analysis.days_since_filing
        ),
    );
    out.push_str("    </div>\n");
    if !analysis.ownership_tier.trim().is_empty() {
        let _ = writeln!(
            out,
            r#"    <div class="ownership-tier">{}</div>"#,
            escape_html(&analysis.ownership_tier)
        );
    }
    out.push_str("</div>\n");
}

/// `value` must already be escaped.
fn detail(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        r#"        <div class="detail"><span class="detail-label">{label}</span><span class="detail-value">{value}</span></div>"#
    );
}
