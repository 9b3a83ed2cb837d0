//! Display formatting for backend timestamps and prices.
//!
//! The backend sends RFC 3339 timestamps, or naive ones without an offset.
//! Unparseable input is shown as-is rather than hidden.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `dd.mm.yyyy`.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%d.%m.%Y").to_string())
}

/// `dd.mm.yyyy HH:MM`, used under comments.
pub fn format_datetime(raw: &str) -> String {
    parse_timestamp(raw)
        .map_or_else(|| raw.to_owned(), |dt| dt.format("%d.%m.%Y %H:%M").to_string())
}

/// Price in manat. Whole amounts drop the decimals.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0} AZN")
    } else {
        format!("{price:.2} AZN")
    }
}

/// Whole seconds as `m:ss`.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_owned();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
