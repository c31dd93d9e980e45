//! Timezone helpers based on `chrono` and `chrono-tz`.
//!
//! # Provided Functions
//! - [`parse_timezone`]: Parses an IANA timezone name into a [`Tz`].
//! - [`today_in`]: Returns the current date in an already-parsed timezone.
//! - [`date_in`]: Returns the calendar date of a UTC instant in a timezone.
//!
//! Timezone names must follow the **IANA format**, e.g. `"Asia/Tokyo"` or
//! `"America/Chicago"`.

use std::str::FromStr;

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Parses an IANA timezone name.
///
/// ## Example
/// ```
/// use birthday_notify::time::local::parse_timezone;
///
/// assert!(parse_timezone("America/Chicago").is_ok());
/// assert!(parse_timezone("Mars/Olympus_Mons").is_err());
/// ```
pub fn parse_timezone(tz_name: &str) -> Result<Tz> {
    Tz::from_str(tz_name.trim()).map_err(|_| anyhow!("Invalid timezone name: {}", tz_name))
}

/// Returns **today's date** in `tz`, read from the system clock.
pub fn today_in(tz: &Tz) -> NaiveDate {
    date_in(Utc::now(), tz)
}

/// Returns the calendar date that `instant` falls on in `tz`.
pub fn date_in(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}
