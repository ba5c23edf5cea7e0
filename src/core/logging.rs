//! Logging initialization and utilities
//!
//! Console output is plain text with ANSI colors keyed to severity:
//! errors red, warnings yellow, and records sent to [`SUCCESS_TARGET`] green.

use std::io::Write;

use log::Level;

pub const RED: &str = "\x1b[91m";
pub const YELLOW: &str = "\x1b[93m";
pub const GREEN: &str = "\x1b[92m";
pub const RESET: &str = "\x1b[0m";

/// Log target for positive outcomes, rendered green.
pub const SUCCESS_TARGET: &str = "scenerig::success";

/// Log an info-level record on the success target.
///
/// ```
/// scenerig::success!("Environment loaded to {}", "/Environment");
/// ```
#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        ::log::info!(target: $crate::core::logging::SUCCESS_TARGET, $($arg)+)
    };
}

/// Initialize the logging system
///
/// Uses env_logger with default filter level of `info`, writing to stdout.
/// Override with RUST_LOG environment variable.
pub fn init(color: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .target(env_logger::Target::Stdout)
    .format(move |buf, record| {
        let paint = if color { color_for(record.level(), record.target()) } else { None };
        match paint {
            Some(code) => writeln!(buf, "{}{}{}", code, record.args(), RESET),
            None => writeln!(buf, "{}", record.args()),
        }
    })
    .init();
}

/// ANSI color for a record, or `None` for the terminal default.
pub fn color_for(level: Level, target: &str) -> Option<&'static str> {
    match level {
        Level::Error => Some(RED),
        Level::Warn => Some(YELLOW),
        _ if target == SUCCESS_TARGET => Some(GREEN),
        _ => None,
    }
}
