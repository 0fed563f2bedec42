//! Shared formatting utilities for the UI layer.

use chrono::{Datelike, NaiveDate};
use shared_types::Case;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a date as "Mar 9, 2024".
pub fn format_date_human(date: NaiveDate) -> String {
    format!(
        "{} {}, {}",
        MONTH_NAMES[date.month0() as usize],
        date.day(),
        date.year()
    )
}

/// Human-readable creation date of a case.
///
/// Unparseable values are shown as sent; a missing value renders as "-".
pub fn format_created(case: &Case) -> String {
    match case.created_on() {
        Some(date) => format_date_human(date),
        None if case.created_at.trim().is_empty() => "-".to_string(),
        None => case.created_at.clone(),
    }
}
