//! # Birthday Observance Rule
//!
//! Decides whether a birth date is celebrated on a given day.
//!
//! - A birthday is observed when month and day match today's.
//! - A February 29 birthday is observed on March 1 in common years.
//!   February 28 is never an observance day.
//!
//! # Example
//! ```
//! use birthday_notify::birthday::rule::BirthdayRule;
//! use birthday_notify::chrono::NaiveDate;
//!
//! let leap_baby = NaiveDate::from_ymd_opt(1972, 2, 29).unwrap();
//!
//! assert!(BirthdayRule::is_observed(leap_baby, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()));
//! assert!(!BirthdayRule::is_observed(leap_baby, NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()));
//! ```

use chrono::{Datelike, NaiveDate};

use crate::time::month_day::MonthDay;

/// Date-matching policy for birthdays.
pub struct BirthdayRule;

impl BirthdayRule {
    /// Returns `true` if a person born on `birth_date` celebrates on `today`.
    pub fn is_observed(birth_date: NaiveDate, today: NaiveDate) -> bool {
        let today_md = MonthDay::from(today);
        let birth_md = MonthDay::from(birth_date);

        birth_md == today_md || Self::is_deferred_leap_day(birth_md, today)
    }

    /// Returns the day a birthday is observed in `year`.
    ///
    /// ```
    /// use birthday_notify::birthday::rule::BirthdayRule;
    /// use birthday_notify::chrono::NaiveDate;
    ///
    /// let born = NaiveDate::from_ymd_opt(1976, 2, 29).unwrap();
    /// assert_eq!(
    ///     BirthdayRule::observance_in(born, 2023),
    ///     NaiveDate::from_ymd_opt(2023, 3, 1)
    /// );
    /// ```
    ///
    /// `None` only when `year` is outside the range `chrono` can represent.
    pub fn observance_in(birth_date: NaiveDate, year: i32) -> Option<NaiveDate> {
        let birth_md = MonthDay::from(birth_date);
        if birth_md == MonthDay::LEAP_DAY && !is_leap_year(year) {
            return MonthDay::MARCH_FIRST.in_year(year);
        }
        birth_md.in_year(year)
    }

    fn is_deferred_leap_day(birth_md: MonthDay, today: NaiveDate) -> bool {
        birth_md == MonthDay::LEAP_DAY
            && !is_leap_year(today.year())
            && MonthDay::from(today) == MonthDay::MARCH_FIRST
    }
}

/// Proleptic Gregorian leap-year test.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
