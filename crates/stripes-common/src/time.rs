//! Calendar arithmetic for monthly data.

use chrono::{Datelike, NaiveDate};

/// Number of days in the calendar month containing `date`.
///
/// Leap years are accounted for: February 2020 has 29 days, February 2021
/// has 28.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    // The first of a real month always constructs.
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    (next - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_common_months() {
        assert_eq!(days_in_month(date(2019, 1, 15)), 31);
        assert_eq!(days_in_month(date(2019, 4, 1)), 30);
        assert_eq!(days_in_month(date(2019, 12, 31)), 31);
    }

    #[test]
    fn test_february_leap_rules() {
        assert_eq!(days_in_month(date(2019, 2, 1)), 28);
        assert_eq!(days_in_month(date(2020, 2, 1)), 29);
        assert_eq!(days_in_month(date(1900, 2, 1)), 28); // century, not a leap year
        assert_eq!(days_in_month(date(2000, 2, 1)), 29); // divisible by 400
    }
}
