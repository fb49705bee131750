//! Logging setup: human-readable stderr output plus an optional JSON log file.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "TIDYPROSE_LOG_PATH";
const LOG_DIR_ENV: &str = "TIDYPROSE_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "tidyprose.jsonl";

/// Where, if anywhere, to write the JSON log file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Log file path. `None` disables file logging.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to `config_log_dir`.
    ///
    /// `TIDYPROSE_LOG_PATH` wins over `TIDYPROSE_LOG_DIR`, which wins over the
    /// config file's `log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            non_empty_env(LOG_PATH_ENV),
            non_empty_env(LOG_DIR_ENV),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = log_path.or_else(|| {
            log_dir
                .or(config_log_dir)
                .map(|dir| dir.join(DEFAULT_LOG_FILE))
        });
        Self { log_file }
    }
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build the log filter. `RUST_LOG` wins; otherwise flags adjust the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held until exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let file_name = path
                .file_name()
                .with_context(|| format!("log path has no file name: {}", path.display()))?;
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
