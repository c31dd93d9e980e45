//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with fallback defaults.
//! Used by [`AppConfig`](crate::config::app::AppConfig).
//!
//! Each reader has a `*_from` variant taking a provider function, so parsing
//! rules can be tested without touching the process environment.
//!
//! # Examples
//! ```rust,no_run
//! use birthday_notify::config::env::{read_flag, read_string};
//!
//! let log_lines = read_flag("NOTIFY_LOG_LINES", false);
//! let tz = read_string("APP_TIMEZONE", "UTC");
//! ```

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// # Example
/// ```rust
/// use birthday_notify::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("yes".into()), "NOTIFY_LOG_LINES", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = unquote(&v);
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads a string variable, falling back to `default` when it is unset or
/// blank.
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string variable using a custom provider function.
///
/// Surrounding whitespace and quotes are stripped.
///
/// # Example
/// ```rust
/// use birthday_notify::config::env::read_string_from;
///
/// let tz = read_string_from(|_| Some("'Asia/Tokyo'".into()), "APP_TIMEZONE", "UTC");
/// assert_eq!(tz, "Asia/Tokyo");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    read_optional_from(provider, name).unwrap_or_else(|| default.to_string())
}

/// Reads an optional string variable; blank values count as unset.
pub fn read_optional(name: &str) -> Option<String> {
    read_optional_from(|k| std::env::var(k).ok(), name)
}

pub fn read_optional_from<F>(provider: F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .map(|v| unquote(&v).to_string())
        .filter(|v| !v.is_empty())
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches(|c| c == '"' || c == '\'')
}
