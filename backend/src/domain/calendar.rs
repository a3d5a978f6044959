//! Availability calendar domain logic.
//!
//! This module holds the month grid generation, month navigation and the
//! entry points for blocked-date and range-selection handling. The UI keeps
//! the booking list, the month anchor and the selection; every call here is a
//! pure function of those snapshots.

use chrono::{Datelike, Days, NaiveDate};
use shared::{CalendarDay, CalendarMonth, DateSelection, VenueBooking};
use tracing::{debug, info};

use super::blocked_dates::BlockedDateSet;
use super::date_selection::{apply_day_click, SelectionState};
use super::dates::{first_of_month, format_date_key, month_name, shift_month, weekday_labels};
use crate::config::CalendarConfig;

/// Six full weeks
pub const GRID_CELLS: usize = 42;

/// Calendar service that handles all calendar-related business logic
#[derive(Debug, Clone, Default)]
pub struct CalendarService {
    config: CalendarConfig,
}

impl CalendarService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Index the venue's bookings by blocked day
    pub fn build_blocked_dates(&self, bookings: &[VenueBooking]) -> BlockedDateSet {
        info!(
            "🗓️ CALENDAR: Indexing {} bookings (checkout day {:?})",
            bookings.len(),
            self.config.checkout_day
        );
        let blocked = BlockedDateSet::from_bookings(bookings, self.config.checkout_day);
        info!("🗓️ CALENDAR: {} blocked days", blocked.len());
        blocked
    }

    /// Generate the 42-cell grid for the month containing `anchor`
    pub fn build_month_grid(
        &self,
        anchor: NaiveDate,
        today: NaiveDate,
        blocked: &BlockedDateSet,
        selection: &DateSelection,
    ) -> CalendarMonth {
        let first = first_of_month(anchor);
        let leading = self.config.week_start.column_of(first);
        let grid_start = first
            .checked_sub_days(Days::new(u64::from(leading)))
            .unwrap_or(first);
        let floor = self.config.booking_floor(today);

        let (range_start, range_end) = match SelectionState::of(selection) {
            SelectionState::Empty => (None, None),
            SelectionState::PartialStart(check_in) => (Some(check_in), None),
            SelectionState::Complete(check_in, check_out) if check_in < check_out => {
                (Some(check_in), Some(check_out))
            }
            // Inverted snapshot: nothing to highlight
            SelectionState::Complete(..) => (None, None),
        };

        debug!(
            "Generating calendar for {}/{} starting {} ({} leading days)",
            first.month(),
            first.year(),
            grid_start,
            leading
        );

        let days: Vec<CalendarDay> = grid_start
            .iter_days()
            .take(GRID_CELLS)
            .map(|date| {
                let in_current_month = date.month() == first.month() && date.year() == first.year();
                let is_past = date < floor;
                let is_blocked = blocked.contains(date);
                let is_in_range = match (range_start, range_end) {
                    (Some(start), Some(end)) => date > start && date < end,
                    _ => false,
                };
                let is_disabled = is_past
                    || is_blocked
                    || (!in_current_month && self.config.disable_out_of_month_days);

                CalendarDay {
                    date,
                    key: format_date_key(date),
                    day: date.day(),
                    in_current_month,
                    is_today: date == today,
                    is_past,
                    is_blocked,
                    is_range_start: range_start == Some(date),
                    is_range_end: range_end == Some(date),
                    is_in_range,
                    is_disabled,
                }
            })
            .collect();

        info!(
            "🗓️ CALENDAR: Generated {} days for {}/{} ({} blocked, {} in range)",
            days.len(),
            first.month(),
            first.year(),
            days.iter().filter(|day| day.is_blocked).count(),
            days.iter().filter(|day| day.is_in_range).count()
        );

        CalendarMonth {
            year: first.year(),
            month: first.month(),
            label: format!("{} {}", month_name(first.month()), first.year()),
            weekday_labels: weekday_labels(self.config.week_start),
            days,
        }
    }

    /// Next selection after the user clicks `day`
    pub fn on_day_click(
        &self,
        day: &CalendarDay,
        selection: &DateSelection,
        blocked: &BlockedDateSet,
    ) -> DateSelection {
        apply_day_click(day, selection, blocked, self.config.backward_click)
    }

    /// "Clear dates"
    pub fn clear_selection(&self) -> DateSelection {
        info!("🗓️ CALENDAR: Clearing selected dates");
        DateSelection::empty()
    }

    pub fn selection_state(&self, selection: &DateSelection) -> SelectionState {
        SelectionState::of(selection)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, anchor: NaiveDate) -> NaiveDate {
        let previous = shift_month(anchor, -1);
        info!("🗓️ CALENDAR: Navigating back to {}/{}", previous.month(), previous.year());
        previous
    }

    /// Navigate to the next month
    pub fn next_month(&self, anchor: NaiveDate) -> NaiveDate {
        let next = shift_month(anchor, 1);
        info!("🗓️ CALENDAR: Navigating forward to {}/{}", next.month(), next.year());
        next
    }

    /// Month to show when the calendar opens: the check-in month if one is
    /// picked, otherwise the current month
    pub fn initial_month(&self, selection: &DateSelection, today: NaiveDate) -> NaiveDate {
        first_of_month(selection.check_in.unwrap_or(today))
    }
}
