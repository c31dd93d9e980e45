//! # Application Runner
//!
//! Drives one run: every person in the roster goes through the
//! [`NotificationService`], and each resulting notification is rendered with
//! a [`LineFormat`] and written to an output sink.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::domain::person::Person;
use crate::notification::service::NotificationService;
use crate::presentation::line::LineFormat;

/// One-shot notification run over a fixed roster.
#[derive(Debug)]
pub struct App {
    service: NotificationService<Person>,
    people: Vec<Person>,
    format: LineFormat,
    log_lines: bool,
}

impl App {
    pub fn new(service: NotificationService<Person>, people: Vec<Person>, format: LineFormat) -> Self {
        Self {
            service,
            people,
            format,
            log_lines: false,
        }
    }

    /// Also emit every rendered line as an `info` event.
    pub fn log_lines(mut self, enabled: bool) -> Self {
        self.log_lines = enabled;
        self
    }

    /// Writes one line per notification to `out` and returns how many were
    /// written.
    ///
    /// # Errors
    /// Fails only if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<usize> {
        let mut written = 0;
        for notification in self.service.generate_all(&self.people) {
            let line = self.format.render(&notification);
            if self.log_lines {
                info!(%line, "notification");
            }
            writeln!(out, "{line}").context("failed to write notification")?;
            written += 1;
        }

        info!(
            people = self.people.len(),
            notifications = written,
            "notification run finished"
        );
        Ok(written)
    }
}
