use log::{debug, error, info};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup. `RUST_LOG` overrides
/// the defaults below.
pub fn init_logger() {
    INIT.call_once(|| {
        let result = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("burger_api", log::LevelFilter::Debug) // More verbose for our app
            .filter_module("diesel", log::LevelFilter::Warn) // Reduce diesel noise
            .filter_module("hyper", log::LevelFilter::Warn)
            .filter_module("tower_http", log::LevelFilter::Info)
            .parse_default_env()
            .format_timestamp_secs()
            .format_module_path(false)
            .try_init();

        match result {
            Ok(()) => info!("Logging system initialized"),
            Err(e) => eprintln!("Logger already initialized: {}", e),
        }
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log database operations
    pub fn db_operation(operation: &str, table: &str, duration_ms: Option<u64>) {
        match duration_ms {
            Some(duration) => debug!("DB: {} on {} completed in {}ms", operation, table, duration),
            None => debug!("DB: Starting {} on {}", operation, table),
        }
    }

    /// Log errors with context
    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
    table: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &str, table: &'static str) -> Self {
        LogContext::db_operation(operation, table, None);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
            table,
        }
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::db_operation(&self.operation, self.table, Some(duration));
        duration
    }
}
