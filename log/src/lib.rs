use std::{fmt::Display, str::FromStr};

use backtrace::Backtrace;
use tracing::{debug, error, info, level_filters::LevelFilter, trace, warn};

/// Installs the global subscriber. An unknown `level_filter` falls back to `info`.
pub fn init(display_level: &bool, level_filter: &str) {
    let (level_filter, is_known) = parse_level_filter(level_filter);

    if tracing_subscriber::fmt()
        .with_level(*display_level)
        .with_max_level(level_filter)
        .with_target(false)
        .try_init()
        .is_err()
    {
        return;
    }

    if !is_known {
        warn(
            None,
            format!("[Log] Unknown level filter, falling back to {level_filter}"),
        );
    }
}

fn parse_level_filter(level_filter: &str) -> (LevelFilter, bool) {
    match LevelFilter::from_str(level_filter.trim()) {
        Ok(level) => (level, true),
        Err(_) => (LevelFilter::INFO, false),
    }
}

pub fn trace<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => trace!("{prefix} {msg}"),
        None => trace!("🐾 {msg}"),
    }
}

pub fn debug<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => debug!("{prefix} {msg}"),
        None => debug!("🐞 {msg}"),
    };
}

pub fn info<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => info!("{prefix} {msg}"),
        None => info!("📢 {msg}"),
    };
}

pub fn warn<T: Display>(prefix: Option<&str>, msg: T) {
    match prefix {
        Some(prefix) => warn!("{prefix} {msg}"),
        None => warn!("⚠️ {msg}"),
    };
}

/// Logs at error level, appending a backtrace when `RUST_BACKTRACE=1`.
pub fn error<T: Display>(prefix: Option<&str>, msg: T) {
    let show_backtrace = std::env::var("RUST_BACKTRACE").is_ok_and(|var| var == "1");
    let prefix = prefix.unwrap_or("🚨");
    match show_backtrace {
        true => error!("{prefix} {msg}\n{:?}", Backtrace::new()),
        false => error!("{prefix} {msg}"),
    };
}

pub fn panic<T: Display>(prefix: Option<&str>, msg: T) -> ! {
    match prefix {
        Some(prefix) => panic!("{prefix} {msg}"),
        None => panic!("☠️ {msg}"),
    }
}
