//! Display Helpers
//!
//! Date normalization, money formatting and number parsing for form inputs.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::LineItem;

const INPUT_DATE: &str = "%Y-%m-%d";

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, INPUT_DATE) {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// Normalize a backend date to the `YYYY-MM-DD` form a date input expects.
/// Unrecognized values are kept as-is.
pub fn input_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format(INPUT_DATE).to_string(),
        None => raw.to_string(),
    }
}

/// Table rendering of a date (`M/D/YYYY`)
pub fn display_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// `YYYY-MM-DD` for a UTC timestamp in milliseconds
pub fn date_from_millis(millis: f64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis as i64).map(|dt| dt.format(INPUT_DATE).to_string())
}

pub fn money(amount: f64) -> String {
    format!("Rs. {:.2}", amount)
}

/// One line of the invoice table's item column
pub fn line_summary(item: &LineItem) -> String {
    format!("{} ({} × Rs.{:.2})", item.item_name, item.quantity, item.price_per_item)
}

/// Leading number of a form input (`12abc` is 12); no finite number counts as 0
pub fn parse_number(raw: &str) -> f64 {
    let raw = raw.trim_start();
    raw.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| raw[..end].parse::<f64>().ok().filter(|n| n.is_finite()))
        .unwrap_or(0.0)
}
