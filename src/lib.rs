//! # birthday_notify
//!
//! Decides who gets a birthday notification today and what it says.
//!
//! This crate provides:
//! - A birthday observance rule with leap-day deferral (`birthday::rule`)
//! - A pluggable notification generator port and aggregating service (`notification`)
//! - An injectable clock so "today" is never read from ambient state (`time`)
//! - Roster loading, line rendering and environment configuration for the
//!   `birthday-notify` binary (`domain`, `presentation`, `config`, `app`)
//!
//! ## Example usage
//!
//! ```rust
//! use birthday_notify::chrono::NaiveDate;
//! use birthday_notify::domain::person::Person;
//! use birthday_notify::notification::service::NotificationService;
//! use birthday_notify::time::fixed_clock::FixedClock;
//!
//! let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
//! let service = NotificationService::birthday(clock);
//!
//! let saul = Person::new("Saul Williams", NaiveDate::from_ymd_opt(1972, 2, 29).unwrap());
//! let notifications = service.generate(&saul);
//!
//! assert_eq!(notifications.len(), 1);
//! assert_eq!(notifications[0].title(), "Happy Birthday!");
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use chrono;
pub use chrono_tz;

// ===============================
// Public modules
// ===============================
pub mod app;
pub mod birthday;
pub mod config;
pub mod domain;
pub mod error;
pub mod notification;
pub mod presentation;
pub mod time;
