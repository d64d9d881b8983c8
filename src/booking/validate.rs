//! Ordered validation rules for bookings and cancellations
//!
//! Rules run in a fixed order and the first failure wins, so a caller
//! always sees the most fundamental problem with a candidate first.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use uuid::Uuid;

use crate::constants::{
    CLOSING_HOUR, MAX_BOOKING_MINUTES, MIN_BOOKING_AGE_YEARS, OPENING_HOUR,
    SLOT_GRANULARITY_MINUTES,
};
use crate::utils::time::age_on;

use super::{RejectReason, Slot};

/// An existing reservation on the candidate's court and date, as seen
/// by the conflict check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookedSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub user_id: Uuid,
}

/// Date and time constraints on a candidate slot.
///
/// Checks, in order: the play date is not in the past, both times fall
/// on the half hour, the slot lies within opening hours, a same-day
/// start is strictly in the future, the range is non-empty, and the
/// duration does not exceed the maximum.
pub fn validate_slot(slot: &Slot, now: NaiveDateTime) -> Result<(), RejectReason> {
    if slot.date < now.date() {
        return Err(RejectReason::PastDate);
    }

    if !on_granularity(slot.start) || !on_granularity(slot.end) {
        return Err(RejectReason::InvalidGranularity);
    }

    if slot.start.hour() < OPENING_HOUR || past_closing(slot.end) {
        return Err(RejectReason::OutsideHours);
    }

    if slot.date == now.date() && slot.start <= now.time() {
        return Err(RejectReason::PastStartTime);
    }

    if slot.start >= slot.end {
        return Err(RejectReason::EndBeforeStart);
    }

    if slot.duration_minutes() > MAX_BOOKING_MINUTES {
        return Err(RejectReason::DurationExceeded);
    }

    Ok(())
}

/// Overlap scan against the existing reservations for the candidate's
/// court and date. A clash with the acting user's own reservation is
/// reported distinctly from a slot taken by someone else.
pub fn check_conflicts(
    slot: &Slot,
    booked_by: Uuid,
    existing: &[BookedSlot],
) -> Result<(), RejectReason> {
    for taken in existing {
        if slot.overlaps(taken.start, taken.end) {
            return Err(if taken.user_id == booked_by {
                RejectReason::SlotConflictSelf
            } else {
                RejectReason::SlotConflictOther
            });
        }
    }
    Ok(())
}

/// Minimum-age rule: the player must be at least 16 on the play date.
pub fn check_age(birth_date: NaiveDate, play_date: NaiveDate) -> Result<(), RejectReason> {
    if age_on(birth_date, play_date) < MIN_BOOKING_AGE_YEARS {
        return Err(RejectReason::UnderMinimumAge);
    }
    Ok(())
}

/// Cancellation window: a reservation can be cancelled until its start
/// time. Anything dated in the past, or starting at or before the
/// current time today, stays on the books.
pub fn validate_cancellation(
    play_date: NaiveDate,
    start: NaiveTime,
    now: NaiveDateTime,
) -> Result<(), RejectReason> {
    if play_date < now.date() {
        return Err(RejectReason::AlreadyPast);
    }
    if play_date == now.date() && start <= now.time() {
        return Err(RejectReason::AlreadyPast);
    }
    Ok(())
}

fn on_granularity(t: NaiveTime) -> bool {
    t.minute() % SLOT_GRANULARITY_MINUTES == 0 && t.second() == 0
}

fn past_closing(end: NaiveTime) -> bool {
    end.hour() > CLOSING_HOUR || (end.hour() == CLOSING_HOUR && end.minute() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_time(t(h, m))
    }

    const TODAY: (i32, u32, u32) = (2026, 8, 10);

    fn today() -> NaiveDate {
        d(TODAY.0, TODAY.1, TODAY.2)
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    fn slot(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Slot {
        Slot::new(date, start, end)
    }

    fn uid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    // ── validate_slot ────────────────────────────────────────────────

    #[test]
    fn accepts_plain_future_slot() {
        let s = slot(tomorrow(), t(14, 0), t(14, 30));
        assert_eq!(validate_slot(&s, at(today(), 9, 0)), Ok(()));
    }

    #[test]
    fn rejects_past_date() {
        let s = slot(d(2026, 8, 9), t(14, 0), t(14, 30));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::PastDate)
        );
    }

    #[test]
    fn rejects_off_grid_start_minute() {
        // 14:15 start is refused even when everything else is fine
        let s = slot(tomorrow(), t(14, 15), t(14, 45));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::InvalidGranularity)
        );
    }

    #[test]
    fn rejects_off_grid_end_minute() {
        let s = slot(tomorrow(), t(14, 0), t(14, 45));
        assert_eq!(validate_slot(&s, at(today(), 9, 0)), Ok(()));
        let s = slot(tomorrow(), t(14, 0), t(14, 40));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::InvalidGranularity)
        );
    }

    #[test]
    fn rejects_before_opening() {
        let s = slot(tomorrow(), t(6, 30), t(7, 0));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::OutsideHours)
        );
    }

    #[test]
    fn rejects_past_closing() {
        let s = slot(tomorrow(), t(19, 30), t(20, 30));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::OutsideHours)
        );
    }

    #[test]
    fn boundary_hours_are_bookable() {
        // First and last slots of the day
        let first = slot(tomorrow(), t(7, 0), t(7, 30));
        let last = slot(tomorrow(), t(19, 30), t(20, 0));
        assert_eq!(validate_slot(&first, at(today(), 9, 0)), Ok(()));
        assert_eq!(validate_slot(&last, at(today(), 9, 0)), Ok(()));
    }

    #[test]
    fn rejects_same_day_start_at_current_time() {
        let s = slot(today(), t(14, 0), t(14, 30));
        assert_eq!(
            validate_slot(&s, at(today(), 14, 0)),
            Err(RejectReason::PastStartTime)
        );
    }

    #[test]
    fn accepts_same_day_start_one_minute_ahead() {
        let s = slot(today(), t(14, 0), t(14, 30));
        assert_eq!(validate_slot(&s, at(today(), 13, 59)), Ok(()));
    }

    #[test]
    fn rejects_same_day_start_already_passed() {
        let s = slot(today(), t(14, 0), t(14, 30));
        assert_eq!(
            validate_slot(&s, at(today(), 14, 1)),
            Err(RejectReason::PastStartTime)
        );
    }

    #[test]
    fn rejects_empty_range() {
        let s = slot(tomorrow(), t(14, 0), t(14, 0));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::EndBeforeStart)
        );
    }

    #[test]
    fn rejects_inverted_range() {
        let s = slot(tomorrow(), t(14, 30), t(14, 0));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::EndBeforeStart)
        );
    }

    #[test]
    fn rejects_ninety_minute_booking() {
        // 14:00-15:30 exceeds the one-hour cap regardless of conflicts
        let s = slot(tomorrow(), t(14, 0), t(15, 30));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::DurationExceeded)
        );
    }

    #[test]
    fn accepts_full_hour_booking() {
        let s = slot(tomorrow(), t(14, 0), t(15, 0));
        assert_eq!(validate_slot(&s, at(today(), 9, 0)), Ok(()));
    }

    #[test]
    fn first_failure_wins() {
        // Both off-grid and over-long: granularity is reported first
        let s = slot(tomorrow(), t(14, 15), t(16, 15));
        assert_eq!(
            validate_slot(&s, at(today(), 9, 0)),
            Err(RejectReason::InvalidGranularity)
        );
    }

    // ── check_conflicts ──────────────────────────────────────────────

    fn booked(start: NaiveTime, end: NaiveTime, user: Uuid) -> BookedSlot {
        BookedSlot {
            start,
            end,
            user_id: user,
        }
    }

    #[test]
    fn no_conflict_on_free_court() {
        let s = slot(tomorrow(), t(14, 0), t(14, 30));
        assert_eq!(check_conflicts(&s, uid(1), &[]), Ok(()));
    }

    #[test]
    fn overlapping_booking_by_other_user_is_a_conflict() {
        let s = slot(tomorrow(), t(14, 0), t(14, 30));
        let existing = [booked(t(14, 15), t(14, 45), uid(2))];
        assert_eq!(
            check_conflicts(&s, uid(1), &existing),
            Err(RejectReason::SlotConflictOther)
        );
    }

    #[test]
    fn own_overlapping_booking_is_reported_distinctly() {
        let s = slot(tomorrow(), t(14, 0), t(14, 30));
        let existing = [booked(t(14, 0), t(14, 30), uid(1))];
        assert_eq!(
            check_conflicts(&s, uid(1), &existing),
            Err(RejectReason::SlotConflictSelf)
        );
    }

    #[test]
    fn adjacent_bookings_do_not_conflict() {
        let s = slot(tomorrow(), t(14, 30), t(15, 0));
        let existing = [
            booked(t(14, 0), t(14, 30), uid(2)),
            booked(t(15, 0), t(15, 30), uid(3)),
        ];
        assert_eq!(check_conflicts(&s, uid(1), &existing), Ok(()));
    }

    #[test]
    fn first_overlap_in_order_decides_the_reason() {
        let s = slot(tomorrow(), t(14, 0), t(15, 0));
        let existing = [
            booked(t(14, 0), t(14, 30), uid(2)),
            booked(t(14, 30), t(15, 0), uid(1)),
        ];
        assert_eq!(
            check_conflicts(&s, uid(1), &existing),
            Err(RejectReason::SlotConflictOther)
        );
    }

    #[test]
    fn accepted_sequence_never_overlaps() {
        // Simulate a sequence of bookings, admitting only validated ones,
        // then assert the pairwise no-overlap invariant.
        let date = tomorrow();
        let candidates = [
            (t(14, 0), t(15, 0), uid(1)),
            (t(14, 30), t(15, 0), uid(2)), // overlaps first
            (t(15, 0), t(15, 30), uid(3)),
            (t(14, 0), t(14, 30), uid(4)), // overlaps first
            (t(15, 30), t(16, 30), uid(5)),
            (t(16, 0), t(16, 30), uid(6)), // overlaps fifth
        ];

        let mut accepted: Vec<BookedSlot> = Vec::new();
        for (start, end, user) in candidates {
            let s = slot(date, start, end);
            if validate_slot(&s, at(today(), 9, 0)).is_ok()
                && check_conflicts(&s, user, &accepted).is_ok()
            {
                accepted.push(booked(start, end, user));
            }
        }

        assert_eq!(accepted.len(), 3);
        for (i, a) in accepted.iter().enumerate() {
            for b in accepted.iter().skip(i + 1) {
                assert!(
                    !(a.start < b.end && b.start < a.end),
                    "{} - {} overlaps {} - {}",
                    a.start,
                    a.end,
                    b.start,
                    b.end
                );
            }
        }
    }

    // ── check_age ────────────────────────────────────────────────────

    #[test]
    fn sixteenth_birthday_is_old_enough() {
        let play = d(2026, 8, 10);
        assert_eq!(check_age(d(2010, 8, 10), play), Ok(()));
    }

    #[test]
    fn day_before_sixteenth_birthday_is_too_young() {
        let play = d(2026, 8, 10);
        assert_eq!(
            check_age(d(2010, 8, 11), play),
            Err(RejectReason::UnderMinimumAge)
        );
    }

    #[test]
    fn adults_pass_the_age_rule() {
        let play = d(2026, 8, 10);
        assert_eq!(check_age(d(1990, 1, 1), play), Ok(()));
    }

    // ── validate_cancellation ────────────────────────────────────────

    #[test]
    fn cancelling_yesterdays_reservation_is_rejected() {
        assert_eq!(
            validate_cancellation(d(2026, 8, 9), t(14, 0), at(today(), 9, 0)),
            Err(RejectReason::AlreadyPast)
        );
    }

    #[test]
    fn cancelling_after_start_today_is_rejected() {
        assert_eq!(
            validate_cancellation(today(), t(14, 0), at(today(), 14, 0)),
            Err(RejectReason::AlreadyPast)
        );
        assert_eq!(
            validate_cancellation(today(), t(14, 0), at(today(), 15, 0)),
            Err(RejectReason::AlreadyPast)
        );
    }

    #[test]
    fn cancelling_before_start_today_is_allowed() {
        assert_eq!(
            validate_cancellation(today(), t(14, 0), at(today(), 13, 59)),
            Ok(())
        );
    }

    #[test]
    fn cancelling_future_reservation_is_allowed() {
        assert_eq!(
            validate_cancellation(tomorrow(), t(7, 0), at(today(), 19, 0)),
            Ok(())
        );
    }
}
