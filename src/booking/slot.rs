//! Bookable time slots

use chrono::{NaiveDate, NaiveTime};

/// A candidate interval on one court: a play date plus a half-open
/// `[start, end)` time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, start, end }
    }

    /// Length of the slot in whole minutes. Negative if end precedes start.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Interval overlap against another `[start, end)` range on the same
    /// date. Adjacent ranges (one ending exactly where the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other_start: NaiveTime, other_end: NaiveTime) -> bool {
        self.start < other_end && other_start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slot(start: NaiveTime, end: NaiveTime) -> Slot {
        Slot::new(NaiveDate::from_ymd_opt(2026, 8, 10).unwrap(), start, end)
    }

    #[test]
    fn duration() {
        assert_eq!(slot(t(14, 0), t(14, 30)).duration_minutes(), 30);
        assert_eq!(slot(t(14, 0), t(15, 0)).duration_minutes(), 60);
        assert_eq!(slot(t(14, 0), t(13, 30)).duration_minutes(), -30);
    }

    #[test]
    fn overlap_partial() {
        let s = slot(t(14, 0), t(14, 30));
        assert!(s.overlaps(t(14, 15), t(14, 45)));
        assert!(s.overlaps(t(13, 45), t(14, 15)));
    }

    #[test]
    fn overlap_containment() {
        let s = slot(t(14, 0), t(15, 0));
        assert!(s.overlaps(t(14, 15), t(14, 45)));
        // And the other way around
        let inner = slot(t(14, 15), t(14, 45));
        assert!(inner.overlaps(t(14, 0), t(15, 0)));
    }

    #[test]
    fn adjacent_is_not_overlap() {
        let s = slot(t(14, 0), t(14, 30));
        assert!(!s.overlaps(t(14, 30), t(15, 0)));
        assert!(!s.overlaps(t(13, 30), t(14, 0)));
    }

    #[test]
    fn identical_is_overlap() {
        let s = slot(t(14, 0), t(14, 30));
        assert!(s.overlaps(t(14, 0), t(14, 30)));
    }
}
