use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A booking on a venue as returned by the bookings API.
///
/// Dates are kept as the raw strings the API sent (either `YYYY-MM-DD` or a
/// full ISO timestamp) so that one malformed record can be skipped instead of
/// failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueBooking {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_from: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub date_to: String,
    /// Guest count, passed through untouched for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
}

impl VenueBooking {
    pub fn new(id: impl Into<String>, date_from: impl Into<String>, date_to: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date_from: date_from.into(),
            date_to: date_to.into(),
            guests: None,
        }
    }
}

/// Missing or null strings read as empty; an empty date never parses, so the
/// record is dropped later instead of failing the whole list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope used by the bookings API for list responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub data: Vec<VenueBooking>,
}

/// The user's in-progress or completed check-in/check-out pick.
///
/// Owned by the hosting UI; the calendar engine takes a snapshot and hands
/// back the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateSelection {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl DateSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_at(check_in: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: None,
        }
    }

    pub fn range(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
        }
    }

    /// Both ends are set
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.check_in, self.check_out) {
            (Some(from), Some(to)) => write!(f, "{} → {}", from, to),
            (Some(from), None) => write!(f, "{} → …", from),
            _ => write!(f, "no dates selected"),
        }
    }
}

/// One cell of the 6×7 month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// `YYYY-MM-DD` form of `date`
    pub key: String,
    /// Day of month, for the cell label
    pub day: u32,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub is_blocked: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    /// Strictly between check-in and check-out
    pub is_in_range: bool,
    /// Clicks on this cell are ignored
    pub is_disabled: bool,
}

/// A month ready for display: header labels plus exactly 42 cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    /// e.g. "June 2024"
    pub label: String,
    pub weekday_labels: Vec<String>,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// The grid split into its six weeks
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Payload for the external "create booking" call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub venue_id: String,
}

/// Validation result for the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFormValidation {
    pub is_valid: bool,
    pub errors: Vec<BookingValidationError>,
    /// Length of the stay when the selection is complete
    pub nights: Option<i64>,
}

/// Specific booking form validation errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingValidationError {
    MissingDates,
    InvalidRange,
    GuestsOutOfRange { max: u32 },
    RangeUnavailable,
}

impl fmt::Display for BookingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingValidationError::MissingDates => {
                write!(f, "Please select check-in and check-out dates.")
            }
            BookingValidationError::InvalidRange => {
                write!(f, "Check-out must be after check-in.")
            }
            BookingValidationError::GuestsOutOfRange { max } => {
                write!(f, "Guests must be between 1 and {}.", max)
            }
            BookingValidationError::RangeUnavailable => {
                write!(f, "That range includes unavailable dates.")
            }
        }
    }
}

/// A user's bookings split around today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingTimeline {
    /// Not yet finished, soonest first
    pub upcoming: Vec<VenueBooking>,
    /// Finished before today, most recent first
    pub past: Vec<VenueBooking>,
}
