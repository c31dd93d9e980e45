//! # Line Rendering
//!
//! Turns a [`Notification`] into a single line of text for a console or log.
//!
//! | Format | Output |
//! |--------|--------|
//! | [`LineFormat::Tab`] | `"<title>\t<message>"` |
//! | [`LineFormat::Bullet`] | `"* <title> <message>"` |
//!
//! # Example
//! ```
//! use birthday_notify::notification::notification::Notification;
//! use birthday_notify::presentation::line::LineFormat;
//!
//! let n = Notification::new("Happy Birthday!", "Have a fabulous birthday Ja Rule!");
//! let format: LineFormat = "bullet".parse().unwrap();
//!
//! assert_eq!(format.render(&n), "* Happy Birthday! Have a fabulous birthday Ja Rule!");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::notification::notification::Notification;

/// Text layout for one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineFormat {
    /// Title and message separated by a tab.
    #[default]
    Tab,
    /// A `*` bullet followed by title and message separated by spaces.
    Bullet,
}

impl LineFormat {
    pub fn render(&self, notification: &Notification) -> String {
        match self {
            LineFormat::Tab => format!("{}\t{}", notification.title(), notification.message()),
            LineFormat::Bullet => format!("* {} {}", notification.title(), notification.message()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineFormat::Tab => "tab",
            LineFormat::Bullet => "bullet",
        }
    }
}

impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a format name is neither `tab` nor `bullet`.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown line format {0:?} (expected \"tab\" or \"bullet\")")]
pub struct UnknownLineFormat(pub String);

impl FromStr for LineFormat {
    type Err = UnknownLineFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tab" => Ok(LineFormat::Tab),
            "bullet" => Ok(LineFormat::Bullet),
            _ => Err(UnknownLineFormat(s.to_string())),
        }
    }
}
