//! Logging infrastructure for SajaruBox.
//!
//! Stdout carries protocol messages, so every layer built here writes to
//! stderr (and optionally a file), never to stdout.

use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Environment variable for the minimum level.
pub const ENV_LOG_LEVEL: &str = "SAJARUBOX_LOG_LEVEL";
/// Environment variable for the output format.
pub const ENV_LOG_FORMAT: &str = "SAJARUBOX_LOG_FORMAT";
/// Environment variable for an extra log file.
pub const ENV_LOG_FILE: &str = "SAJARUBOX_LOG_FILE";

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log file path, written in addition to stderr.
    pub file_path: Option<PathBuf>,
    /// Include source location.
    pub source_location: bool,
    /// Emit span open/close events.
    pub span_events: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive understood by [`EnvFilter`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| LogError::InvalidLevel(s.to_string()))
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl LogFormat {
    /// Parse from string; unknown names fall back to pretty.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            file_path: None,
            source_location: false,
            span_events: false,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    ///
    /// `SAJARUBOX_LOG_LEVEL` wins over `RUST_LOG`; values that do not parse
    /// as a plain level are ignored.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Apply environment overrides on top of this config.
    pub fn with_env(mut self) -> Self {
        let level = std::env::var(ENV_LOG_LEVEL)
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok());
        if let Some(level) = level.as_deref().and_then(LogLevel::parse) {
            self.level = level;
        }

        if let Ok(format) = std::env::var(ENV_LOG_FORMAT) {
            self.format = LogFormat::parse(&format);
        }

        if let Ok(file_path) = std::env::var(ENV_LOG_FILE) {
            if !file_path.is_empty() {
                self.file_path = Some(PathBuf::from(file_path));
            }
        }

        self
    }

    /// Set the level.
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the format.
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Also write to a file.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// Filter for this config. A `RUST_LOG` holding full directives
    /// (e.g. `sajarubox_tools=trace`) takes precedence.
    pub fn filter(&self) -> EnvFilter {
        match std::env::var("RUST_LOG") {
            Ok(directives) if LogLevel::parse(&directives).is_none() => {
                EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            _ => EnvFilter::new(self.level.as_str()),
        }
    }
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

fn fmt_layer<S, W>(config: &LogConfig, writer: W, ansi: bool) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_span_events(config.span_events())
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    match config.format {
        LogFormat::Pretty => base.with_ansi(ansi).with_target(true).boxed(),
        LogFormat::Compact => base.compact().with_ansi(ansi).boxed(),
        LogFormat::Json => base.json().boxed(),
    }
}

/// Initialize logging with the given configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let mut layers = vec![fmt_layer(&config, io::stderr, true)];

    if let Some(path) = &config.file_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LogError::FileError {
                path: path.clone(),
                source,
            })?;
        layers.push(fmt_layer(&config, file, false));
    }

    tracing_subscriber::registry()
        .with(config.filter())
        .with(layers)
        .try_init()
        .map_err(|e| LogError::InitError(e.to_string()))
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    InitError(String),

    #[error("failed to open log file {}: {source}", path.display())]
    FileError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown log level: {0}")]
    InvalidLevel(String),
}

/// Convenience macros re-exported from tracing.
pub use tracing::{debug, error, info, trace, warn};
