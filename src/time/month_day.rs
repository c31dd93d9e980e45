//! # Month-Day Projection
//!
//! [`MonthDay`] is the `(month, day)` part of a calendar date with the year
//! dropped. Birthdays are compared on this projection.

use std::fmt;

use chrono::{Datelike, NaiveDate};

/// A month and day of month, without a year.
///
/// Ordering is calendar order within a year (January 1 first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u32,
    day: u32,
}

impl MonthDay {
    /// February 29.
    pub const LEAP_DAY: MonthDay = MonthDay { month: 2, day: 29 };
    /// March 1, the day a leap-day birthday is observed in common years.
    pub const MARCH_FIRST: MonthDay = MonthDay { month: 3, day: 1 };

    /// Builds a month-day, returning `None` if it never occurs in any year.
    ///
    /// February 29 is accepted.
    ///
    /// ```
    /// use birthday_notify::time::month_day::MonthDay;
    ///
    /// assert!(MonthDay::new(2, 29).is_some());
    /// assert!(MonthDay::new(4, 31).is_none());
    /// ```
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so every month-day that can exist exists in it.
        NaiveDate::from_ymd_opt(2000, month, day).map(Self::from)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Returns this month-day in `year`, or `None` for Feb 29 in a common year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl From<NaiveDate> for MonthDay {
    fn from(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_drops_the_year() {
        let a = MonthDay::from(NaiveDate::from_ymd_opt(1879, 3, 14).unwrap());
        let b = MonthDay::from(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());

        assert_eq!(a, b);
        assert_eq!(a.month(), 3);
        assert_eq!(a.day(), 14);
    }

    #[test]
    fn new_rejects_impossible_combinations() {
        for (m, d) in [(0, 1), (13, 1), (1, 0), (2, 30), (4, 31), (12, 32)] {
            assert!(MonthDay::new(m, d).is_none(), "{m}-{d} should be rejected");
        }
    }

    #[test]
    fn new_accepts_leap_day() {
        assert_eq!(MonthDay::new(2, 29), Some(MonthDay::LEAP_DAY));
        assert_eq!(MonthDay::new(3, 1), Some(MonthDay::MARCH_FIRST));
    }

    #[test]
    fn leap_day_only_exists_in_leap_years() {
        assert!(MonthDay::LEAP_DAY.in_year(2024).is_some());
        assert!(MonthDay::LEAP_DAY.in_year(2021).is_none());
        assert!(MonthDay::LEAP_DAY.in_year(1900).is_none());
        assert!(MonthDay::LEAP_DAY.in_year(2000).is_some());
    }

    #[test]
    fn ordering_follows_the_calendar() {
        assert!(MonthDay::LEAP_DAY < MonthDay::MARCH_FIRST);
        assert!(MonthDay::new(12, 31).unwrap() > MonthDay::new(1, 1).unwrap());
    }

    #[test]
    fn display_uses_iso_month_day() {
        assert_eq!(MonthDay::LEAP_DAY.to_string(), "--02-29");
    }
}
