//! Blocked-date index: turns a venue's bookings into a per-day membership test.

use std::collections::HashSet;

use chrono::NaiveDate;
use shared::VenueBooking;
use tracing::{debug, warn};

use super::dates::parse_calendar_date;
use crate::config::CheckoutDayPolicy;

/// Calendar days on which an existing booking makes the venue unavailable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDateSet {
    days: HashSet<NaiveDate>,
}

impl BlockedDateSet {
    /// Build the index from a list of bookings.
    ///
    /// Bookings with unparseable or inverted dates are skipped; a single bad
    /// record never blanks out the rest of the calendar.
    pub fn from_bookings(bookings: &[VenueBooking], checkout_day: CheckoutDayPolicy) -> Self {
        let mut days = HashSet::new();
        let mut skipped = 0usize;

        for booking in bookings {
            let (from, to) = match (
                parse_calendar_date(&booking.date_from),
                parse_calendar_date(&booking.date_to),
            ) {
                (Some(from), Some(to)) if from <= to => (from, to),
                _ => {
                    warn!(
                        "Skipping booking '{}' with malformed dates ({} → {})",
                        booking.id, booking.date_from, booking.date_to
                    );
                    skipped += 1;
                    continue;
                }
            };

            // A same-day booking still blocks its one day under either policy
            let last = match checkout_day {
                CheckoutDayPolicy::Available if to > from => to.pred_opt().unwrap_or(from),
                _ => to,
            };

            for day in from.iter_days().take_while(|day| *day <= last) {
                days.insert(day);
            }
        }

        debug!(
            "Built blocked-date index: {} days from {} bookings ({} skipped)",
            days.len(),
            bookings.len(),
            skipped
        );

        Self { days }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// Whether any blocked day lies strictly between `start` and `end`
    pub fn any_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start
            .iter_days()
            .skip(1)
            .take_while(|day| *day < end)
            .any(|day| self.contains(day))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Blocked days in ascending order
    pub fn sorted(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.days.iter().copied().collect();
        days.sort();
        days
    }
}

impl FromIterator<NaiveDate> for BlockedDateSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
