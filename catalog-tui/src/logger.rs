//! Logging Infrastructure
//!
//! All diagnostics go through `tracing` into the in-app log panel, which
//! is the only place errors ever show up.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Initialize the logger, routing `tracing` and `log` records to the TUI log panel
pub fn init_logger() {
    init_logger_with_level(None);
}

/// Initialize the logger with an explicit fallback filter
pub fn init_logger_with_level(log_level: Option<&str>) {
    let fallback = log_level.unwrap_or(DEFAULT_FILTER);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    if let Err(e) = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .try_init()
    {
        eprintln!("Logger already initialized: {e}");
    }

    // Dependencies logging through the `log` crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);
}
