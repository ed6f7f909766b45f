//! Calendar date parsing and month arithmetic.
//!
//! Dates are parsed under exactly one format. There is no fallback to other
//! layouts: a value that does not match is missing.

use chrono::{Datelike, NaiveDate};

/// Parses `value` with the `chrono` format string `format`.
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, format).ok()
}

/// `YYYY-MM` period label.
pub fn period_label(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Whole calendar months from `start` to `end`, ignoring the day of month.
///
/// Negative when `end` falls in an earlier month than `start`.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORMAT: &str = "%d-%m-%Y";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_day_month_year() {
        assert_eq!(parse_date("15-06-2015", FORMAT), Some(date(2015, 6, 15)));
        assert_eq!(parse_date(" 01-01-2000 ", FORMAT), Some(date(2000, 1, 1)));
    }

    #[test]
    fn other_layouts_are_missing() {
        assert_eq!(parse_date("2015-06-15", FORMAT), None);
        assert_eq!(parse_date("Jun-2015", FORMAT), None);
        assert_eq!(parse_date("15/06/2015", FORMAT), None);
        assert_eq!(parse_date("15-06-2015 00:00", FORMAT), None);
    }

    #[test]
    fn invalid_calendar_dates_are_missing() {
        assert_eq!(parse_date("31-02-2015", FORMAT), None);
        assert_eq!(parse_date("15-13-2015", FORMAT), None);
        assert_eq!(parse_date("", FORMAT), None);
    }

    #[test]
    fn period_label_pads_month() {
        assert_eq!(period_label(date(2015, 6, 15)), "2015-06");
        assert_eq!(period_label(date(2009, 12, 1)), "2009-12");
    }

    #[test]
    fn months_between_ignores_day() {
        assert_eq!(months_between(date(2000, 1, 1), date(2015, 6, 15)), 185);
        assert_eq!(months_between(date(2015, 6, 30), date(2015, 6, 1)), 0);
    }

    #[test]
    fn months_between_can_be_negative() {
        assert_eq!(months_between(date(2016, 3, 1), date(2015, 6, 1)), -9);
    }
}
