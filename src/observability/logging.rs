//! Logging configuration for the Discovery client.

use std::fmt;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::errors::{DiscoveryError, DiscoveryResult};

/// Target used by the client's own log events.
pub const LOG_TARGET: &str = "integrations_watson_discovery";

/// Log level enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Trace level - most verbose.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
    /// Off - no logging.
    Off,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.directive().to_uppercase())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" => Ok(LogLevel::Off),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output.
    Pretty,
    /// One JSON object per event.
    Json,
    /// Single-line output.
    #[default]
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for the client's own events.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Whether `RUST_LOG` overrides `level`.
    pub use_env_filter: bool,
    /// Extra filter directives, e.g. `reqwest=warn`.
    pub directives: Vec<String>,
    /// Whether to include span enter/exit events.
    pub log_spans: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            use_env_filter: true,
            directives: Vec::new(),
            log_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Creates a new logging configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder.
    pub fn builder() -> LoggingConfigBuilder {
        LoggingConfigBuilder::default()
    }

    /// Creates a debug configuration.
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
            format: LogFormat::Pretty,
            ..Default::default()
        }
    }

    /// Creates a production configuration.
    pub fn production() -> Self {
        Self {
            level: LogLevel::Warn,
            format: LogFormat::Json,
            ..Default::default()
        }
    }

    /// Builds the filter this configuration installs.
    pub fn env_filter(&self) -> DiscoveryResult<EnvFilter> {
        let base = format!("{}={}", LOG_TARGET, self.level.directive());
        let mut filter = if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&base))
        } else {
            EnvFilter::new(&base)
        };

        for directive in &self.directives {
            let parsed: Directive = directive.parse().map_err(|e| {
                DiscoveryError::configuration(format!("Invalid log directive '{}': {}", directive, e))
            })?;
            filter = filter.add_directive(parsed);
        }
        Ok(filter)
    }

    /// Installs a global subscriber.
    ///
    /// Fails when a global subscriber is already set.
    pub fn init(&self) -> DiscoveryResult<()> {
        let filter = self.env_filter()?;
        let span_events = if self.log_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let registry = tracing_subscriber::registry().with(filter);

        let result = match self.format {
            LogFormat::Pretty => registry
                .with(tracing_subscriber::fmt::layer().pretty().with_span_events(span_events))
                .try_init(),
            LogFormat::Json => registry
                .with(tracing_subscriber::fmt::layer().json().with_span_events(span_events))
                .try_init(),
            LogFormat::Compact => registry
                .with(tracing_subscriber::fmt::layer().compact().with_span_events(span_events))
                .try_init(),
        };

        result.map_err(|e| DiscoveryError::configuration(format!("Failed to install log subscriber: {}", e)))
    }
}

/// Builder for logging configuration.
#[derive(Default)]
pub struct LoggingConfigBuilder {
    config: LoggingConfig,
}

impl LoggingConfigBuilder {
    /// Sets the log level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    /// Sets the output format.
    pub fn format(mut self, format: LogFormat) -> Self {
        self.config.format = format;
        self
    }

    /// Sets whether `RUST_LOG` is honored.
    pub fn use_env_filter(mut self, enabled: bool) -> Self {
        self.config.use_env_filter = enabled;
        self
    }

    /// Adds a filter directive.
    pub fn directive(mut self, directive: impl Into<String>) -> Self {
        self.config.directives.push(directive.into());
        self
    }

    /// Sets whether span open and close events are logged.
    pub fn log_spans(mut self, enabled: bool) -> Self {
        self.config.log_spans = enabled;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> LoggingConfig {
        self.config
    }
}
