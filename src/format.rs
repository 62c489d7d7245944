//! Display formatting for numbers, currency and dates.
//!
//! Output matches what the browser dashboard produced: one-decimal suffixed
//! abbreviations rounded the way JavaScript's `toFixed` rounds, and en-US
//! short dates regardless of the host locale.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;
const THOUSAND: f64 = 1e3;

/// Fixed-point rendering with JavaScript `Number.prototype.toFixed` rounding:
/// ties are decided on the exact binary value and break away from zero.
///
/// ```
/// use sec_dashboard::format::to_fixed;
/// assert_eq!(to_fixed(7.25, 1), "7.3");
/// assert_eq!(to_fixed(0.15, 1), "0.1"); // 0.15 is stored slightly below the tie
/// assert_eq!(to_fixed(3.0, 2), "3.00");
/// ```
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    let prec = digits as usize;
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            let out = format!("{rounded:.prec$}");
            // Decimal keeps the sign of a value that rounds to zero.
            if rounded.is_zero() && out.starts_with('-') {
                out[1..].to_string()
            } else {
                out
            }
        }
        // Beyond Decimal's range (~7.9e28) every f64 is integral, so there is no tie to break.
        None => format!("{value:.prec$}"),
    }
}

/// Abbreviates a magnitude: `1.5B`, `2.3M`, `1.0K`, or a plain integer below 1000.
///
/// Zero, missing and non-finite inputs render as `"0"`.
///
/// ```
/// use sec_dashboard::format::format_number;
/// assert_eq!(format_number(999.0), "999");
/// assert_eq!(format_number(1000.0), "1.0K");
/// assert_eq!(format_number(1_500_000.0), "1.5M");
/// assert_eq!(format_number(None), "0");
/// ```
pub fn format_number(value: impl Into<Option<f64>>) -> String {
    match nonzero(value.into()) {
        Some(v) => abbreviate(v),
        None => "0".into(),
    }
}

/// [`format_number`] with a leading `$`; zero or missing renders as `"$0"`.
pub fn format_currency(value: impl Into<Option<f64>>) -> String {
    match nonzero(value.into()) {
        Some(v) => format!("${}", abbreviate(v)),
        None => "$0".into(),
    }
}

/// Renders an API date as `Jan 5, 2024`.
///
/// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
/// offset is used), naive `YYYY-MM-DDTHH:MM:SS[.fff]` date-times and plain
/// `YYYY-MM-DD` dates. Empty input yields an empty string; anything else
/// unparseable is echoed back unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }
    match parse_date(raw) {
        Some(d) => d.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Renders a refresh timestamp as a 12-hour clock time, e.g. `3:04:05 PM`.
pub fn format_time(ts: DateTime<Utc>) -> String {
    ts.format("%-I:%M:%S %p").to_string()
}

/// Renders a ratio as JavaScript would interpolate a number: `5`, `7.5`, `0.25`.
pub fn format_plain(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".into()
    }
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

fn abbreviate(v: f64) -> String {
    let mag = v.abs();
    if mag >= BILLION {
        format!("{}B", to_fixed(v / BILLION, 1))
    } else if mag >= MILLION {
        format!("{}M", to_fixed(v / MILLION, 1))
    } else if mag >= THOUSAND {
        format!("{}K", to_fixed(v / THOUSAND, 1))
    } else {
        let rounded = js_round(v);
        if rounded == 0.0 { "0".into() } else { format!("{rounded:.0}") }
    }
}

/// `Math.round`: nearest integer, exact halves towards +infinity.
fn js_round(v: f64) -> f64 {
    let r = v.round();
    // f64::round breaks ties away from zero; only negative ties differ.
    if v - r == 0.5 { r + 1.0 } else { r }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
