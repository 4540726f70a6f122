//! Logging and tracing setup.
//!
//! Console logging goes to stderr through `tracing-subscriber`'s fmt layer.
//! When a log path or directory is configured, a second layer writes JSONL
//! records through `tracing-appender`'s non-blocking writer; the returned
//! guard must stay alive for the duration of the process.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where file logging should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (wins over `log_dir`).
    pub log_path: Option<PathBuf>,
    /// Directory for a daily-rotated `comfort-map.jsonl` file.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's `log_dir`
    /// as fallback.
    ///
    /// `COMFORT_MAP_LOG_PATH` wins over `COMFORT_MAP_LOG_DIR`, which wins
    /// over the config file value.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("COMFORT_MAP_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("COMFORT_MAP_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`, each `-v`
/// steps the level up from the config file's `log_level`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(fallback_level(quiet, verbose, config_level))
}

fn fallback_level<'a>(quiet: bool, verbose: u8, config_level: &'a str) -> &'a str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => config_level,
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber.
///
/// Returns the appender guard when file logging is active; dropping it
/// flushes and stops the background writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    env_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_writer = match (&config.log_path, &config.log_dir) {
        (Some(path), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(tracing_appender::non_blocking(file))
        }
        (None, Some(dir)) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "comfort-map.jsonl");
            Some(tracing_appender::non_blocking(appender))
        }
        (None, None) => None,
    };

    match file_writer {
        Some((writer, guard)) => {
            let file_layer = fmt::layer().json().with_writer(writer).with_ansi(false);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .with(file_layer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(stderr_layer)
                .init();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_forces_error_level() {
        assert_eq!(fallback_level(true, 0, "info"), "error");
        assert_eq!(fallback_level(true, 2, "debug"), "error");
    }

    #[test]
    fn verbose_steps_up_from_config() {
        assert_eq!(fallback_level(false, 0, "warn"), "warn");
        assert_eq!(fallback_level(false, 1, "warn"), "debug");
        assert_eq!(fallback_level(false, 3, "warn"), "trace");
    }
}
