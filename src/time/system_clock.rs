use anyhow::Result;
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::time::clock::Clock;
use crate::time::local::{parse_timezone, today_in};

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current date based on the operating system's
/// current time, seen from a configured IANA timezone.
///
/// # Design Notes
/// - The timezone is parsed and fixed at construction time, so an invalid
///   name is reported as a configuration error by [`SystemClock::new`] and
///   [`Clock::today`] cannot fail.
/// - Selecting the timezone is the responsibility of the composition root
///   (the `birthday-notify` binary).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    /// Creates a new [`SystemClock`] for an IANA timezone name such as
    /// `"America/Chicago"`.
    ///
    /// # Errors
    /// Returns an error if the timezone name is unknown.
    pub fn new(tz_name: &str) -> Result<Self> {
        Ok(Self {
            tz: parse_timezone(tz_name)?,
        })
    }

    /// Creates a clock for an already-parsed timezone.
    pub fn with_timezone(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::with_timezone(chrono_tz::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        today_in(&self.tz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_date_for_valid_timezone() {
        let clock = SystemClock::new("Asia/Tokyo").unwrap();

        let today = clock.today();

        assert!(today.year() >= 2000);
        assert!((1..=12).contains(&today.month()));
        assert!((1..=31).contains(&today.day()));
    }

    #[test]
    fn system_clock_rejects_invalid_timezone() {
        assert!(SystemClock::new("Invalid/Timezone").is_err());
    }

    #[test]
    fn default_clock_is_utc() {
        assert_eq!(SystemClock::default().timezone(), chrono_tz::UTC);
    }
}
