//! Check-in/check-out range selection.
//!
//! The selection is owned by the hosting UI. Each click is a pure transition
//! from the current snapshot to the next one:
//!
//! - `Empty` or `Complete` + click → `PartialStart` at the clicked day
//! - `PartialStart` + click after check-in → `Complete`, unless a blocked day
//!   lies strictly between, in which case the selection restarts there
//! - `PartialStart` + click on/before check-in → restart (or swap, see
//!   [`BackwardClickPolicy`])
//!
//! Clicks on disabled days leave the selection untouched.

use chrono::NaiveDate;
use shared::{CalendarDay, DateSelection};
use tracing::{debug, info};

use super::blocked_dates::BlockedDateSet;
use crate::config::BackwardClickPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Empty,
    PartialStart(NaiveDate),
    Complete(NaiveDate, NaiveDate),
}

impl SelectionState {
    pub fn of(selection: &DateSelection) -> Self {
        match (selection.check_in, selection.check_out) {
            (None, _) => SelectionState::Empty,
            (Some(check_in), None) => SelectionState::PartialStart(check_in),
            (Some(check_in), Some(check_out)) => SelectionState::Complete(check_in, check_out),
        }
    }
}

/// Apply a day click to the current selection
pub fn apply_day_click(
    day: &CalendarDay,
    selection: &DateSelection,
    blocked: &BlockedDateSet,
    backward_click: BackwardClickPolicy,
) -> DateSelection {
    if day.is_disabled || day.is_past || day.is_blocked || blocked.contains(day.date) {
        debug!("Ignoring click on disabled day {}", day.key);
        return *selection;
    }

    let clicked = day.date;

    let check_in = match SelectionState::of(selection) {
        SelectionState::Empty | SelectionState::Complete(..) => {
            info!("🗓️ CALENDAR: Check-in set to {}", clicked);
            return DateSelection::starting_at(clicked);
        }
        SelectionState::PartialStart(check_in) => check_in,
    };

    if clicked <= check_in {
        return match backward_click {
            BackwardClickPolicy::Swap
                if clicked < check_in && !blocked.any_between(clicked, check_in) =>
            {
                info!("🗓️ CALENDAR: Selected stay {} → {}", clicked, check_in);
                DateSelection::range(clicked, check_in)
            }
            _ => DateSelection::starting_at(clicked),
        };
    }

    if blocked.any_between(check_in, clicked) {
        debug!(
            "Range {} → {} crosses a booked day, restarting at {}",
            check_in, clicked, clicked
        );
        return DateSelection::starting_at(clicked);
    }

    info!("🗓️ CALENDAR: Selected stay {} → {}", check_in, clicked);
    DateSelection::range(check_in, clicked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::format_date_key;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_day(date: NaiveDate) -> CalendarDay {
        CalendarDay {
            date,
            key: format_date_key(date),
            day: chrono::Datelike::day(&date),
            in_current_month: true,
            is_today: false,
            is_past: false,
            is_blocked: false,
            is_range_start: false,
            is_range_end: false,
            is_in_range: false,
            is_disabled: false,
        }
    }

    fn click(day: NaiveDate, selection: DateSelection, blocked: &BlockedDateSet) -> DateSelection {
        apply_day_click(&open_day(day), &selection, blocked, BackwardClickPolicy::Restart)
    }

    #[test]
    fn test_selection_state() {
        let d1 = date(2024, 6, 1);
        let d2 = date(2024, 6, 3);
        assert_eq!(SelectionState::of(&DateSelection::empty()), SelectionState::Empty);
        assert_eq!(
            SelectionState::of(&DateSelection::starting_at(d1)),
            SelectionState::PartialStart(d1)
        );
        assert_eq!(
            SelectionState::of(&DateSelection::range(d1, d2)),
            SelectionState::Complete(d1, d2)
        );
        let orphan = DateSelection { check_in: None, check_out: Some(d2) };
        assert_eq!(SelectionState::of(&orphan), SelectionState::Empty);
    }

    #[test]
    fn test_first_click_starts_selection() {
        let blocked = BlockedDateSet::default();
        let d1 = date(2024, 6, 5);
        assert_eq!(click(d1, DateSelection::empty(), &blocked), DateSelection::starting_at(d1));
    }

    #[test]
    fn test_second_click_completes_range() {
        let blocked = BlockedDateSet::default();
        let d1 = date(2024, 6, 5);
        let d2 = date(2024, 6, 9);
        assert_eq!(
            click(d2, DateSelection::starting_at(d1), &blocked),
            DateSelection::range(d1, d2)
        );
    }

    #[test]
    fn test_next_day_completes_one_night_stay() {
        let blocked = BlockedDateSet::default();
        let d1 = date(2024, 6, 5);
        let d2 = date(2024, 6, 6);
        assert_eq!(
            click(d2, DateSelection::starting_at(d1), &blocked),
            DateSelection::range(d1, d2)
        );
    }

    #[test]
    fn test_click_on_complete_range_restarts() {
        let blocked = BlockedDateSet::default();
        let selection = DateSelection::range(date(2024, 6, 5), date(2024, 6, 9));
        let d3 = date(2024, 6, 20);
        assert_eq!(click(d3, selection, &blocked), DateSelection::starting_at(d3));
    }

    #[test]
    fn test_backward_click_restarts() {
        let blocked = BlockedDateSet::default();
        let d1 = date(2024, 6, 5);
        let d0 = date(2024, 6, 2);
        assert_eq!(click(d0, DateSelection::starting_at(d1), &blocked), DateSelection::starting_at(d0));
        assert_eq!(click(d1, DateSelection::starting_at(d1), &blocked), DateSelection::starting_at(d1));
    }

    #[test]
    fn test_backward_click_swaps_when_configured() {
        let blocked = BlockedDateSet::default();
        let d1 = date(2024, 6, 5);
        let d0 = date(2024, 6, 2);
        let selection = DateSelection::starting_at(d1);

        let swapped = apply_day_click(&open_day(d0), &selection, &blocked, BackwardClickPolicy::Swap);
        assert_eq!(swapped, DateSelection::range(d0, d1));

        // Same-day click never yields a zero-night stay
        let same = apply_day_click(&open_day(d1), &selection, &blocked, BackwardClickPolicy::Swap);
        assert_eq!(same, DateSelection::starting_at(d1));
    }

    #[test]
    fn test_swap_across_blocked_day_restarts() {
        let blocked: BlockedDateSet = [date(2024, 6, 3)].into_iter().collect();
        let d1 = date(2024, 6, 5);
        let d0 = date(2024, 6, 1);
        let result = apply_day_click(
            &open_day(d0),
            &DateSelection::starting_at(d1),
            &blocked,
            BackwardClickPolicy::Swap,
        );
        assert_eq!(result, DateSelection::starting_at(d0));
    }

    #[test]
    fn test_range_across_blocked_day_restarts() {
        let blocked: BlockedDateSet = [date(2024, 6, 7)].into_iter().collect();
        let d1 = date(2024, 6, 5);
        let d2 = date(2024, 6, 9);
        assert_eq!(click(d2, DateSelection::starting_at(d1), &blocked), DateSelection::starting_at(d2));
    }

    #[test]
    fn test_disabled_days_are_ignored() {
        let blocked: BlockedDateSet = [date(2024, 6, 7)].into_iter().collect();
        let selection = DateSelection::starting_at(date(2024, 6, 5));

        let mut past = open_day(date(2024, 6, 8));
        past.is_past = true;
        past.is_disabled = true;
        assert_eq!(apply_day_click(&past, &selection, &blocked, BackwardClickPolicy::Restart), selection);

        let mut padding = open_day(date(2024, 6, 9));
        padding.in_current_month = false;
        padding.is_disabled = true;
        assert_eq!(apply_day_click(&padding, &selection, &blocked, BackwardClickPolicy::Restart), selection);

        // A cell rendered before the booking arrived still honours the fresh index
        let stale = open_day(date(2024, 6, 7));
        assert_eq!(apply_day_click(&stale, &selection, &blocked, BackwardClickPolicy::Restart), selection);
    }
}
