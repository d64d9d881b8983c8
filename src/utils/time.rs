//! Time utilities

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Parse a play date in `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse a wall-clock time in `HH:MM` form
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Format a date back into `YYYY-MM-DD`
pub fn format_date(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

/// Format a time back into `HH:MM`
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Completed years of age on a given date
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> i32 {
    let mut age = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-08-10"), Some(d(2026, 8, 10)));
        assert_eq!(parse_date(" 2026-08-10 "), Some(d(2026, 8, 10)));
        assert_eq!(parse_date("10.08.2026"), None);
        assert_eq!(parse_date("2026-13-01"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("14:30"),
            Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
        );
        assert_eq!(
            parse_time("07:00"),
            Some(NaiveTime::from_hms_opt(7, 0, 0).unwrap())
        );
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("2pm"), None);
        assert_eq!(parse_time(""), None);
    }

    #[test]
    fn test_format_roundtrip() {
        assert_eq!(format_date(d(2026, 8, 10)), "2026-08-10");
        assert_eq!(
            format_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap()),
            "09:30"
        );
    }

    #[test]
    fn test_age_on() {
        // Birthday not yet reached this year
        assert_eq!(age_on(d(2010, 12, 1), d(2026, 8, 10)), 15);
        // Birthday exactly today
        assert_eq!(age_on(d(2010, 8, 10), d(2026, 8, 10)), 16);
        // Birthday already passed
        assert_eq!(age_on(d(2010, 1, 1), d(2026, 8, 10)), 16);
    }
}
