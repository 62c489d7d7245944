//! HTML fragments for the dashboard panels.
//!
//! Every renderer is a pure function of a cached collection: it returns the
//! complete new content of the panel's container, so nothing from a previous
//! render survives. Interpolated text is always escaped, and only `http`/`https`
//! URLs are emitted as links.

mod filings;
mod opportunities;
mod sectors;
mod trends;

pub use filings::render_filings;
pub use opportunities::render_opportunities;
pub use sectors::render_sectors;
pub use trends::render_trends;

use std::fmt::Display;

use crate::page::PanelKind;

/// Escapes the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shown while a panel's fetch is in flight.
pub fn loading(kind: PanelKind) -> String {
    format!(
        r#"<div class="loading">Loading {}...</div>"#,
        kind.operation()
    )
}

/// Shown instead of cards when the collection is empty. Not styled as an error.
pub fn placeholder(kind: PanelKind) -> String {
    format!(r#"<div class="empty-state">{}</div>"#, kind.empty_message())
}

/// Replaces a panel whose fetch failed.
pub fn error(kind: PanelKind, err: &impl Display) -> String {
    format!(
        r#"<div class="error">Failed to load {}: {}</div>"#,
        kind.operation(),
        escape_html(&err.to_string())
    )
}

/// `text`, or `fallback` when it is blank; escaped either way.
pub(crate) fn or_fallback(text: &str, fallback: &str) -> String {
    if text.trim().is_empty() {
        escape_html(fallback)
    } else {
        escape_html(text)
    }
}

/// A lowercase, dash-separated CSS class suffix.
pub(crate) fn css_token(s: &str) -> String {
    let token: String = s
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    if token.is_empty() { "unknown".into() } else { token }
}
