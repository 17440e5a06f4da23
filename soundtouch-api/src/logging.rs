//! Opt-in tracing output for applications using this crate
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! the application installs a subscriber, either its own or one of these.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Variable selecting the mode for [`init_logging_from_env`]
pub const LOG_MODE_ENV: &str = "SOUNDTOUCH_LOG_MODE";

/// Variable overriding the filter, e.g. `soundtouch_api=debug,http_client=trace`
pub const LOG_LEVEL_ENV: &str = "SOUNDTOUCH_LOG_LEVEL";

/// How much to log, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoggingMode {
    /// No subscriber is installed
    #[default]
    Silent,
    /// Compact stderr output at `info`
    Development,
    /// Pretty output with source locations at `debug`
    Debug,
}

impl LoggingMode {
    /// Parse a mode name; unrecognized names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(LoggingMode::Silent),
            "development" | "dev" => Some(LoggingMode::Development),
            "debug" => Some(LoggingMode::Debug),
            _ => None,
        }
    }

    fn default_filter(&self) -> &'static str {
        match self {
            LoggingMode::Silent => "off",
            LoggingMode::Development => "info",
            LoggingMode::Debug => "debug",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Install a global subscriber for `mode`
///
/// The filter comes from `SOUNDTOUCH_LOG_LEVEL`, then `RUST_LOG`, then the
/// mode's default level.
///
/// # Errors
///
/// Fails if a global subscriber is already set or the filter does not parse.
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter(mode.default_filter())?;
            Registry::default()
                .with(fmt::layer().with_target(false).compact())
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter(mode.default_filter())?;
            Registry::default()
                .with(fmt::layer().pretty().with_file(true).with_line_number(true))
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Install a subscriber for the mode named in `SOUNDTOUCH_LOG_MODE`
///
/// Missing or unrecognized values mean [`LoggingMode::Silent`].
pub fn init_logging_from_env() -> Result<(), LoggingError> {
    let mode = std::env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|name| LoggingMode::from_name(&name))
        .unwrap_or_default();
    init_logging(mode)
}

pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directives = std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());

    EnvFilter::try_new(&directives).map_err(|e| LoggingError::InvalidFilter {
        filter: directives.clone(),
        reason: e.to_string(),
    })
}
