//! # Application Configuration Loader
//!
//! Loads settings for the `birthday-notify` binary from environment
//! variables.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `APP_TIMEZONE` | IANA timezone used to decide what "today" is | `"UTC"` |
//! | `NOTIFY_FORMAT` | Line format, `tab` or `bullet` | `"tab"` |
//! | `PEOPLE_FILE` | JSON roster to check | *none* (built-in roster) |
//! | `NOTIFY_LOG_LINES` | Also emit each line as a log event | `false` |
//!
//! # Example
//! ```rust,no_run
//! use birthday_notify::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env().expect("valid configuration");
//! println!("checking birthdays in {}", cfg.timezone);
//! ```

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono_tz::Tz;

use crate::config::env::{read_flag, read_optional, read_string};
use crate::presentation::line::LineFormat;
use crate::time::local::parse_timezone;

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Environment name from `APP_ENV`.
    pub app_env: String,
    /// Timezone in which "today" is computed.
    pub timezone: Tz,
    /// How each notification is rendered.
    pub format: LineFormat,
    /// Roster file; `None` selects the built-in roster.
    pub people_file: Option<PathBuf>,
    /// Whether rendered lines are also logged.
    pub log_lines: bool,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// # Errors
    /// - When `APP_TIMEZONE` is not a valid IANA name
    /// - When `NOTIFY_FORMAT` is neither `tab` nor `bullet`
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let tz_name = read_string("APP_TIMEZONE", "UTC");
        let timezone = parse_timezone(&tz_name).context("APP_TIMEZONE is invalid")?;

        let format = read_string("NOTIFY_FORMAT", LineFormat::default().as_str())
            .parse::<LineFormat>()
            .context("NOTIFY_FORMAT is invalid")?;

        Ok(AppConfig {
            app_env,
            timezone,
            format,
            people_file: read_optional("PEOPLE_FILE").map(PathBuf::from),
            log_lines: read_flag("NOTIFY_LOG_LINES", false),
        })
    }
}
