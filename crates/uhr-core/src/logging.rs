//! Logging configuration and setup.

use crate::error::{UhrError, UhrResult};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

/// Environment variable selecting the log format.
pub const ENV_LOG_FORMAT: &str = "UHR_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level.
    pub level: Level,
    /// Output format.
    pub format: LogFormat,
    /// Include source file location.
    pub include_location: bool,
    /// Custom filter string (e.g., "uhr_shell=debug,wry=warn").
    pub filter: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: LogFormat::Pretty,
            include_location: false,
            filter: None,
        }
    }
}

impl LogConfig {
    /// Create a debug configuration.
    pub fn debug() -> Self {
        Self {
            level: Level::DEBUG,
            include_location: true,
            ..Default::default()
        }
    }

    /// Default configuration with the format taken from `UHR_LOG_FORMAT`.
    pub fn from_env() -> Self {
        let mut config = if cfg!(debug_assertions) {
            Self::debug()
        } else {
            Self::default()
        };
        if let Ok(format) = std::env::var(ENV_LOG_FORMAT) {
            config.format = parse_format(&format);
        }
        config
    }

    /// Set a custom filter.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level.to_string());
        match self.filter {
            Some(ref custom) => EnvFilter::try_new(custom).unwrap_or_else(|_| fallback()),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback()),
        }
    }
}

fn parse_format(value: &str) -> LogFormat {
    match value.trim().to_ascii_lowercase().as_str() {
        "compact" => LogFormat::Compact,
        _ => LogFormat::Pretty,
    }
}

/// Initialize logging with the given configuration.
///
/// Records emitted through the `log` facade are forwarded into `tracing`.
pub fn init_logging(config: LogConfig) -> UhrResult<()> {
    tracing_log::LogTracer::init()
        .map_err(|e| UhrError::config(format!("failed to set log tracer: {}", e)))?;

    let filter = config.env_filter();
    let result = match config.format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_file(config.include_location)
                .with_line_number(config.include_location);
            tracing::subscriber::set_global_default(
                tracing_subscriber::registry().with(filter).with(fmt_layer),
            )
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer().compact().with_target(true);
            tracing::subscriber::set_global_default(
                tracing_subscriber::registry().with(filter).with(fmt_layer),
            )
        }
    };

    result.map_err(|e| UhrError::config(format!("failed to set subscriber: {}", e)))
}
