//! Shared logging utilities for consistent tracing across the tracker crates

use crate::types::Component;
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Crates whose events pass the default filter
const TRACED_CRATES: &[&str] = &["tracker", "shared"];

/// Build the filter directive for a base level, e.g. "tracker=info,shared=info"
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    TRACED_CRATES
        .iter()
        .map(|krate| format!("{krate}={base_level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the stdout tracing subscriber with an optional base level
///
/// `RUST_LOG` wins over the base level when it is set.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_directive(log_level)));

    // try_init so tests and embedding hosts can install their own subscriber first
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// Initialize tracing at the default level
pub fn init_tracing() {
    init_tracing_with_level(None);
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for component-aware info logging
#[macro_export]
macro_rules! tracker_info {
    ($component:expr, $($arg:tt)*) => {
        tracing::info!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware warning logging
#[macro_export]
macro_rules! tracker_warn {
    ($component:expr, $($arg:tt)*) => {
        tracing::warn!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware error logging
#[macro_export]
macro_rules! tracker_error {
    ($component:expr, $($arg:tt)*) => {
        tracing::error!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for component-aware debug logging
#[macro_export]
macro_rules! tracker_debug {
    ($component:expr, $($arg:tt)*) => {
        tracing::debug!(
            component = %$component,
            timestamp = shared::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: Component, details: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "Starting {}",
        details
    );
}

/// Logged when a corrupt persisted collection is replaced by an empty one
pub fn log_recovered(component: Component, key: &str, error: &dyn std::fmt::Display) {
    warn!(
        component = %component,
        timestamp = format_timestamp(),
        key = key,
        error = %error,
        "Discarding unreadable '{}' data, starting empty",
        key
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(component: Component, context: &str, error: &dyn std::fmt::Display) {
    error!(
        component = %component,
        timestamp = format_timestamp(),
        error = %error,
        "{} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(component: Component, message: &str) {
    info!(
        component = %component,
        timestamp = format_timestamp(),
        "{}",
        message
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_display() {
        assert_eq!(Component::Store.to_string(), "store");
        assert_eq!(Component::Schedule.to_string(), "schedule");
        assert_eq!(Component::Engine.to_string(), "engine");
        assert_eq!(Component::Weights.to_string(), "weights");
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(None), "tracker=info,shared=info");
        assert_eq!(filter_directive(Some("debug")), "tracker=debug,shared=debug");
    }

    #[test]
    fn test_timestamp_format() {
        let stamp = format_timestamp();
        // HH:MM:SS.mmm
        assert_eq!(stamp.len(), 12);
        assert_eq!(&stamp[2..3], ":");
    }

    #[test]
    fn test_init_tracing_is_repeatable() {
        init_tracing();
        init_tracing_with_level(Some("debug"));
    }
}
