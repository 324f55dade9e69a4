//! Structured logging for the cube world runtime.
//!
//! Console output with uptime timestamps and module paths, plus a JSON log file
//! in debug builds. The filter comes from `RUST_LOG` when set, otherwise from
//! the config's `debug.log_level`.

use cubeworld_config::Config;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config provides one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log written in debug builds.
pub const LOG_FILE_NAME: &str = "cubeworld.log";

/// Resolve the filter string from an optional config.
///
/// An empty `log_level` falls back to [`DEFAULT_FILTER`].
pub fn filter_from_config(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// * `log_dir` - directory for the JSON log file (debug builds only)
/// * `debug_build` - enables the file layer
/// * `config` - optional configuration supplying the log level
///
/// ```no_run
/// use cubeworld_config::Config;
/// use cubeworld_log::init_logging;
///
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_from_config(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && let Some(log_file) = open_log_file(log_dir)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// Create `log_dir` if needed and truncate [`LOG_FILE_NAME`] inside it.
///
/// Returns `None` when the directory or file cannot be created; logging then
/// stays console-only.
pub fn open_log_file(log_dir: &Path) -> Option<std::fs::File> {
    std::fs::create_dir_all(log_dir).ok()?;
    std::fs::File::create(log_dir.join(LOG_FILE_NAME)).ok()
}

/// `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_filter_from_config_uses_log_level() {
        let mut config = Config::default();
        config.debug.log_level = "warn,cubeworld_gravity=trace".to_string();
        assert_eq!(
            filter_from_config(Some(&config)),
            "warn,cubeworld_gravity=trace"
        );
    }

    #[test]
    fn test_empty_log_level_falls_back() {
        let mut config = Config::default();
        config.debug.log_level.clear();
        assert_eq!(filter_from_config(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_from_config(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,cubeworld_gravity=trace",
            "warn,cubeworld_physics=debug",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_from(*filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {}", filter_str);
        }
    }

    #[test]
    fn test_open_log_file_creates_nested_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs").join("session");
        let mut file = open_log_file(&log_dir).unwrap();
        std::io::Write::write_all(&mut file, b"{}\n").unwrap();
        let contents = std::fs::read_to_string(log_dir.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(contents, "{}\n");
    }

    #[test]
    fn test_open_log_file_truncates_previous_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(LOG_FILE_NAME), "old run").unwrap();
        let _file = open_log_file(temp_dir.path()).unwrap();
        let contents = std::fs::read_to_string(temp_dir.path().join(LOG_FILE_NAME)).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_open_log_file_fails_when_dir_is_a_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let blocker = temp_dir.path().join("not_a_dir");
        std::fs::write(&blocker, "x").unwrap();
        assert!(open_log_file(&blocker).is_none());
    }
}
