//! Composition root: reads configuration, picks the clock and roster, and
//! prints today's notifications to stdout. Logs go to stderr.

use std::io;

use anyhow::Result;
use birthday_notify::app::App;
use birthday_notify::config::app::AppConfig;
use birthday_notify::domain::roster::{demo_roster, load_roster};
use birthday_notify::notification::service::NotificationService;
use birthday_notify::time::clock::Clock;
use birthday_notify::time::system_clock::SystemClock;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("birthday_notify=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cfg = AppConfig::from_env()?;
    init_logger();

    let clock = SystemClock::with_timezone(cfg.timezone);
    let today = clock.today();
    info!(env = %cfg.app_env, timezone = %cfg.timezone, %today, "starting notification run");

    let people = match &cfg.people_file {
        Some(path) => load_roster(path)?,
        None => {
            warn!("PEOPLE_FILE not set, using built-in roster");
            demo_roster(today)
        }
    };

    let service = NotificationService::birthday(clock);
    let app = App::new(service, people, cfg.format).log_lines(cfg.log_lines);

    let stdout = io::stdout();
    app.run(&mut stdout.lock())?;
    Ok(())
}
