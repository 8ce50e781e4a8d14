//! Calendar week numbering policy.
//!
//! Progress charts bucket study time by calendar week. The numbering rule is
//! the ISO 8601 one: weeks run Monday through Sunday, and a week belongs to
//! the year in which at least four of its days fall (equivalently, the week
//! containing the first Thursday of the year is week 1).
//!
//! The policy is isolated here so every consumer shares a single definition.

use chrono::{Datelike, NaiveDate};

/// Week number of `date` under the first-four-day-week, Monday-start rule.
pub fn week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

#[cfg(test)]
mod tests {
    use super::week_number;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_number_mid_year() {
        // 2018-03-05 is a Monday in week 10.
        assert_eq!(week_number(date(2018, 3, 5)), 10);
        assert_eq!(week_number(date(2018, 3, 11)), 10);
        assert_eq!(week_number(date(2018, 3, 12)), 11);
    }

    #[test]
    fn test_week_number_first_four_day_rule() {
        // 2016-01-01 is a Friday; fewer than four days of that week fall in
        // 2016, so it belongs to week 53 of 2015.
        assert_eq!(week_number(date(2016, 1, 1)), 53);
        // 2016-01-04 (Monday) starts week 1.
        assert_eq!(week_number(date(2016, 1, 4)), 1);
    }

    #[test]
    fn test_week_number_monday_start() {
        // Sunday closes the week; Monday opens the next one.
        assert_eq!(week_number(date(2018, 1, 7)), 1);
        assert_eq!(week_number(date(2018, 1, 8)), 2);
    }

    #[test]
    fn test_week_number_year_with_leading_week_one() {
        // 2015-01-01 is a Thursday, so its week already counts as week 1.
        assert_eq!(week_number(date(2015, 1, 1)), 1);
        assert_eq!(week_number(date(2014, 12, 29)), 1);
    }
}
