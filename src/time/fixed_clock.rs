//! # Test Clocks
//!
//! Deterministic [`Clock`] implementations.
//!
//! - [`FixedClock`] always answers the same date.
//! - [`MutableClock`] answers a date that can be changed through a shared
//!   reference, so a generator built once can be re-evaluated on other days.
//!
//! # Example
//! ```
//! use birthday_notify::chrono::NaiveDate;
//! use birthday_notify::time::clock::Clock;
//! use birthday_notify::time::fixed_clock::MutableClock;
//!
//! let clock = MutableClock::new(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
//! clock.set(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap());
//! assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2021, 3, 15).unwrap());
//! ```

use std::sync::RwLock;

use chrono::{Days, NaiveDate};

use crate::time::clock::Clock;

/// A [`Clock`] that always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// A [`Clock`] whose date can be changed after construction.
///
/// Starts at the Unix epoch date (1970-01-01) when built with [`Default`].
#[derive(Debug)]
pub struct MutableClock {
    date: RwLock<NaiveDate>,
}

impl MutableClock {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: RwLock::new(date),
        }
    }

    /// Moves the clock to `date`.
    pub fn set(&self, date: NaiveDate) {
        *self.date.write().unwrap_or_else(|e| e.into_inner()) = date;
    }

    /// Moves the clock forward by `days` days.
    ///
    /// Saturates at the latest representable date.
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.date.write().unwrap_or_else(|e| e.into_inner());
        *guard = guard.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::new(NaiveDate::default())
    }
}

impl Clock for MutableClock {
    fn today(&self) -> NaiveDate {
        *self.date.read().unwrap_or_else(|e| e.into_inner())
    }
}
