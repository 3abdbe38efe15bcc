//! Plain `[LEVEL] message` logging to stderr.
//!
//! # Usage
//!
//! ```no_run
//! use shunt::util::logger::{self, LogLevel};
//!
//! logger::init_with_level(LogLevel::Debug);
//! tracing::debug!("ready");
//! ```

use clap::ValueEnum;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}

/// Initialize logger with a custom level.
///
/// Lines carry no timestamp, target or colour, and go to stderr so they never
/// mix with printed results. Calling this twice is a no-op.
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    let layer = tracing_subscriber::fmt::layer().without_time()
                                                .with_target(false)
                                                .with_level(true)
                                                .with_ansi(false)
                                                .with_writer(std::io::stderr)
                                                .compact()
                                                .with_filter(filter);

    // A subscriber may already be installed, e.g. by an embedding test.
    if let Err(err) = Registry::default().with(layer).try_init() {
        tracing::trace!(%err, "keeping the installed subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_with_level(LogLevel::Warn);
        init_with_level(LogLevel::Trace);
        assert_eq!(tracing::Level::from(LogLevel::default()), tracing::Level::WARN);
    }
}
