/// Date formatting and `<input type="date">` helpers (en-US)
use chrono::{DateTime, NaiveDate, Utc};

/// Short US date: `2024-03-05T10:00:00Z` -> `Mar 5, 2024`
pub fn format_short_date(value: &DateTime<Utc>) -> String {
    format_short_naive_date(value.date_naive())
}

pub fn format_short_naive_date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// Value for a date input: `YYYY-MM-DD`, empty when unset
pub fn format_input_date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parses a date input value; empty or invalid input clears the bound
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
