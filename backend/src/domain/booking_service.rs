//! Booking form domain logic.
//!
//! Guest count handling, booking form validation and the payload for the
//! external create-booking call, plus the upcoming/past split used by the
//! "my bookings" list. The authoritative availability check happens when the
//! booking is committed; the checks here only guard against a stale pick.

use chrono::NaiveDate;
use shared::{
    BookingFormValidation, BookingTimeline, BookingValidationError, CreateBookingRequest,
    DateSelection, VenueBooking,
};
use tracing::{debug, info, warn};

use super::blocked_dates::BlockedDateSet;
use super::dates::{format_date_key, parse_calendar_date};
use crate::config::CalendarConfig;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Invalid booking: {0}")]
    Invalid(BookingValidationError),
}

#[derive(Debug, Clone, Default)]
pub struct BookingService {
    config: CalendarConfig,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        Self { config }
    }

    /// Initial guest count for a venue
    pub fn default_guests(&self, max_guests: u32) -> u32 {
        self.clamp_guests(self.config.default_guests, max_guests)
    }

    /// Clamp a requested guest count into `1..=max_guests`
    pub fn clamp_guests(&self, requested: u32, max_guests: u32) -> u32 {
        requested.clamp(1, max_guests.max(1))
    }

    /// Number of nights of a complete, forward range
    pub fn nights(&self, selection: &DateSelection) -> Option<i64> {
        match (selection.check_in, selection.check_out) {
            (Some(check_in), Some(check_out)) if check_out > check_in => {
                Some((check_out - check_in).num_days())
            }
            _ => None,
        }
    }

    /// Validate the booking form
    pub fn validate_booking(
        &self,
        selection: &DateSelection,
        guests: u32,
        max_guests: u32,
        blocked: &BlockedDateSet,
    ) -> BookingFormValidation {
        let mut errors = Vec::new();

        match (selection.check_in, selection.check_out) {
            (Some(check_in), Some(check_out)) => {
                if check_out <= check_in {
                    errors.push(BookingValidationError::InvalidRange);
                } else if stay_overlaps(check_in, check_out, blocked) {
                    errors.push(BookingValidationError::RangeUnavailable);
                }
            }
            _ => errors.push(BookingValidationError::MissingDates),
        }

        let max = max_guests.max(1);
        if guests == 0 || guests > max {
            errors.push(BookingValidationError::GuestsOutOfRange { max });
        }

        debug!("Booking form for {} with {} guests: {} errors", selection, guests, errors.len());

        BookingFormValidation {
            is_valid: errors.is_empty(),
            errors,
            nights: self.nights(selection),
        }
    }

    /// Build the create-booking payload for a valid form
    pub fn create_booking_request(
        &self,
        venue_id: &str,
        selection: &DateSelection,
        guests: u32,
        max_guests: u32,
        blocked: &BlockedDateSet,
    ) -> Result<CreateBookingRequest, BookingError> {
        info!("📋 BOOKINGS: Preparing booking for venue {} ({})", venue_id, selection);
        let validation = self.validate_booking(selection, guests, max_guests, blocked);
        if let Some(error) = validation.errors.into_iter().next() {
            warn!("📋 BOOKINGS: Booking for venue {} rejected: {}", venue_id, error);
            return Err(BookingError::Invalid(error));
        }

        let (Some(check_in), Some(check_out)) = (selection.check_in, selection.check_out) else {
            return Err(BookingError::Invalid(BookingValidationError::MissingDates));
        };

        info!(
            "📋 BOOKINGS: Prepared booking for venue {}: {} → {} ({} guests)",
            venue_id, check_in, check_out, guests
        );

        Ok(CreateBookingRequest {
            date_from: format_date_key(check_in),
            date_to: format_date_key(check_out),
            guests,
            venue_id: venue_id.to_string(),
        })
    }

    /// Split a user's bookings into upcoming and past around `today`
    pub fn partition_bookings(&self, bookings: &[VenueBooking], today: NaiveDate) -> BookingTimeline {
        info!("📋 BOOKINGS: Splitting {} bookings around {}", bookings.len(), today);
        let mut upcoming = Vec::new();
        let mut past = Vec::new();

        for booking in bookings {
            let (Some(from), Some(to)) = (
                parse_calendar_date(&booking.date_from),
                parse_calendar_date(&booking.date_to),
            ) else {
                debug!("Dropping booking '{}' with unreadable dates", booking.id);
                continue;
            };

            if to < today {
                past.push((from, booking.clone()));
            } else {
                upcoming.push((from, booking.clone()));
            }
        }

        info!("📋 BOOKINGS: {} upcoming, {} past", upcoming.len(), past.len());
        upcoming.sort_by(|a, b| a.0.cmp(&b.0));
        past.sort_by(|a, b| b.0.cmp(&a.0));

        BookingTimeline {
            upcoming: upcoming.into_iter().map(|(_, booking)| booking).collect(),
            past: past.into_iter().map(|(_, booking)| booking).collect(),
        }
    }
}

/// Whether any night of the stay `[check_in, check_out)` is blocked
fn stay_overlaps(check_in: NaiveDate, check_out: NaiveDate, blocked: &BlockedDateSet) -> bool {
    check_in
        .iter_days()
        .take_while(|day| *day < check_out)
        .any(|day| blocked.contains(day))
}
