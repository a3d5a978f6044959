//! # Domain Module
//!
//! Business logic for the venue availability calendar.
//!
//! ## Module Organization
//!
//! - **dates**: day-granularity parsing, formatting and month arithmetic
//! - **blocked_dates**: the blocked-date index built from a venue's bookings
//! - **date_selection**: the check-in/check-out selection state machine
//! - **calendar**: month grid generation and navigation
//! - **booking_service**: booking form validation and the create-booking payload
//!
//! Nothing in here performs network or storage access. Bookings arrive as an
//! already-fetched snapshot, and the selection and month anchor stay owned by
//! the caller.

pub mod blocked_dates;
pub mod booking_service;
pub mod calendar;
pub mod date_selection;
pub mod dates;

pub use blocked_dates::*;
pub use booking_service::*;
pub use calendar::*;
pub use date_selection::*;
pub use dates::*;
