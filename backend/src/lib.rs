//! Availability calendar for venue bookings.
//!
//! Turns a venue's existing bookings into blocked days, lays out a month as a
//! 6×7 grid and walks the user through picking a check-in/check-out range
//! that never crosses a booked day.
//!
//! ```
//! use chrono::NaiveDate;
//! use shared::{DateSelection, VenueBooking};
//! use venue_calendar::CalendarService;
//!
//! let service = CalendarService::new();
//! let blocked = service.build_blocked_dates(&[VenueBooking::new("b1", "2024-06-10", "2024-06-12")]);
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let month = service.build_month_grid(today, today, &blocked, &DateSelection::empty());
//! assert_eq!(month.days.len(), 42);
//! ```

pub mod config;
pub mod domain;

pub use config::{BackwardClickPolicy, CalendarConfig, CheckoutDayPolicy, ConfigError, WeekStart};
pub use domain::*;
