//! Logging setup
//!
//! The terminal UI owns stdout, so log records go to a file under the user
//! data directory (or `--log-dir`). The filter can be overridden with the
//! `JT_COMPARE_LOG` environment variable, e.g. `JT_COMPARE_LOG=jt_compare=trace`.

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding a filter directive
pub const LOG_ENV_VAR: &str = "JT_COMPARE_LOG";

/// Log file name inside the log directory
pub const LOG_FILE_NAME: &str = "jt-compare.log";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level when no env filter is set
    pub level: Level,
    /// Log directory (None = default data directory)
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            dir: None,
        }
    }
}

impl LoggingConfig {
    /// Directory the log file is written to
    pub fn log_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(default_log_dir)
    }

    /// Filter directive used when the env var is unset
    fn default_directive(&self) -> String {
        format!("jt_compare={}", self.level.as_str().to_lowercase())
    }
}

/// Default log directory: `<data-local>/jt-compare/logs`
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("jt-compare")
        .join("logs")
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process. Returns `None` if the log directory cannot
/// be created or a subscriber is already installed; the app then runs
/// without a log file.
pub fn init_logging(config: &LoggingConfig) -> Option<WorkerGuard> {
    let log_dir = config.log_dir();
    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_dir = %log_dir.display(),
        "logging initialized"
    );

    Some(guard)
}
