// src/log.rs
//! `tracing` setup for the binary. Library code only emits events.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[derive(Clone, Debug, Default)]
pub struct LogOptions {
    /// Lower the default filter from `info` to `debug`.
    pub verbose: bool,
    /// Also append plain-text events to `.store/debug.log`.
    pub to_file: bool,
}

impl LogOptions {
    fn default_filter(&self) -> &'static str {
        if self.verbose { "kerala_scrape=debug,info" } else { "info" }
    }
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global subscriber. `RUST_LOG` wins over the defaults.
/// Keep the returned guard alive until exit so the file sink gets flushed.
pub fn init(opts: &LogOptions) -> Result<Option<WorkerGuard>, Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.default_filter()));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if opts.to_file {
        std::fs::create_dir_all(STORE_DIR)?;
        let appender = tracing_appender::rolling::never(STORE_DIR, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr)
            .with(fmt::layer().with_writer(writer).with_ansi(false))
            .try_init()?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry().with(filter).with(stderr).try_init()?;
        Ok(None)
    }
}
