//! Calendar-date helpers shared by the calendar and booking services.
//!
//! Everything here works at day granularity: time-of-day and time zone are
//! stripped before a value reaches the rest of the domain.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// First column of the month grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// Column (0..7) the given date falls in
    pub fn column_of(&self, date: NaiveDate) -> u32 {
        match self {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        }
    }
}

/// Parse an API date into a calendar date.
///
/// Accepts `YYYY-MM-DD` or an ISO timestamp such as
/// `2024-06-10T00:00:00.000Z`; only the date part before `T` is read.
pub fn parse_calendar_date(date_str: &str) -> Option<NaiveDate> {
    let date_part = date_str.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// `YYYY-MM-DD`
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format an API date for booking lists (e.g. "10 Jun 2024")
pub fn format_date_for_display(date_str: &str) -> String {
    match parse_calendar_date(date_str) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Column headers for the grid
pub fn weekday_labels(week_start: WeekStart) -> Vec<String> {
    let labels: [&str; 7] = match week_start {
        WeekStart::Monday => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
        WeekStart::Sunday => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    };
    labels.iter().map(|label| label.to_string()).collect()
}

/// Normalize any date to the 1st of its month
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First of the month `offset` months away from `anchor`.
///
/// Out-of-range results (beyond chrono's supported years) leave the anchor
/// month in place.
pub fn shift_month(anchor: NaiveDate, offset: i32) -> NaiveDate {
    let first = first_of_month(anchor);
    let months = Months::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        first.checked_add_months(months)
    } else {
        first.checked_sub_months(months)
    };
    shifted.unwrap_or(first)
}
