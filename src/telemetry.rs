//! Telemetry and tracing utilities
//!
//! ## Example
//!
//! ```rust,ignore
//! use bedrock_chat::telemetry::{init_subscriber, SubscriberConfig, OutputFormat};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use crate::error::ChatError;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variables read by [`init_from_env`].
pub const LOG_LEVEL_ENV: &str = "BEDROCK_CHAT_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "BEDROCK_CHAT_LOG_FORMAT";
pub const LOG_FILE_ENV: &str = "BEDROCK_CHAT_LOG_FILE";

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON, one object per line
    Json,
    /// JSON without span lists
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            other => Err(ChatError::ConfigurationError(format!(
                "Invalid log format: {other}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Configuration for tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write logs to this file instead of stdout.
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Target filter directives for this crate and the web stack.
    pub fn filter_directives(&self) -> String {
        let level = level_str(self.log_level);
        format!("bedrock_chat={level},axum=warn,reqwest=warn")
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self, ChatError> {
        let level = match level.trim().to_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => {
                return Err(ChatError::ConfigurationError(format!(
                    "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
                )));
            }
        };
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            log_file: self.log_file,
        }
    }
}

fn level_str(level: tracing::Level) -> &'static str {
    match level {
        tracing::Level::TRACE => "trace",
        tracing::Level::DEBUG => "debug",
        tracing::Level::INFO => "info",
        tracing::Level::WARN => "warn",
        tracing::Level::ERROR => "error",
    }
}

/// Initialize tracing subscriber with the given configuration
///
/// ## Returns
///
/// - `Ok(Some(WorkerGuard))` after installing the subscriber. Stdout and file
///   output both go through a non-blocking writer, so the guard must be kept
///   alive for the duration of the program or buffered lines are lost.
/// - `Ok(None)` only when a global subscriber was already installed.
/// - `Err(ChatError::ConfigurationError)` if the log file cannot be used.
pub fn init_subscriber(config: SubscriberConfig) -> Result<Option<WorkerGuard>, ChatError> {
    let filter = EnvFilter::try_new(config.filter_directives())
        .map_err(|e| ChatError::ConfigurationError(format!("Invalid log filter: {e}")))?;

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let file_name = path.file_name().ok_or_else(|| {
                ChatError::ConfigurationError(format!(
                    "Log file path has no file name: {}",
                    path.display()
                ))
            })?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (writer, Some(guard))
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stdout());
            (writer, Some(guard))
        }
    };
    let ansi = config.log_file.is_none();

    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .json()
            .with_span_list(false)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(true)
            .with_ansi(ansi)
            .try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        // Another subscriber (e.g. a test harness) is already installed.
        Err(e) if is_already_initialized(&e.to_string()) => Ok(None),
        Err(e) => Err(ChatError::ConfigurationError(format!(
            "Failed to initialize tracing: {e}"
        ))),
    }
}

fn is_already_initialized(message: &str) -> bool {
    message.contains("already been set") || message.contains("already initialized")
}

/// Initialize tracing subscriber from environment variables
///
/// Supported environment variables:
/// - `BEDROCK_CHAT_LOG_LEVEL`: trace, debug, info, warn, error
/// - `BEDROCK_CHAT_LOG_FORMAT`: text, json, json-compact
/// - `BEDROCK_CHAT_LOG_FILE`: log file path
pub fn init_from_env() -> Result<Option<WorkerGuard>, ChatError> {
    init_subscriber(config_from_lookup(|key| std::env::var(key).ok())?)
}

fn config_from_lookup<F>(lookup: F) -> Result<SubscriberConfig, ChatError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = SubscriberConfig::builder();
    if let Some(level) = lookup(LOG_LEVEL_ENV) {
        builder = builder.log_level_str(&level)?;
    }
    if let Some(format) = lookup(LOG_FORMAT_ENV) {
        builder = builder.output_format(format.parse()?);
    }
    if let Some(file) = lookup(LOG_FILE_ENV) {
        builder = builder.log_file(PathBuf::from(file));
    }
    Ok(builder.build())
}
