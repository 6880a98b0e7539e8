use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name used when the configured path has no file name.
const DEFAULT_LOG_FILE: &str = "gqlmock.log";

/// Builds the level filter from `RUST_LOG`, falling back to `gqlmock=<level>`.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("gqlmock={}", default_level)))
}

/// Splits a log path into the directory and file name handed to the appender.
fn split_log_path(log_path: &Path) -> (PathBuf, PathBuf) {
    let dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));
    (dir.to_path_buf(), PathBuf::from(file))
}

/// Initialize the logging system
///
/// Logs always go to stderr so stdout stays valid JSON.
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to a JSON log file, rotated daily
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, file) = split_log_path(&log_path);
        let _ = std::fs::create_dir_all(&dir);

        let file_appender = tracing_appender::rolling::daily(dir, file);
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("logs/run.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(file, PathBuf::from("run.log"));
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, file) = split_log_path(Path::new("run.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, PathBuf::from("run.log"));
    }

    #[test]
    fn test_split_root_uses_default_name() {
        let (_, file) = split_log_path(Path::new("/"));
        assert_eq!(file, PathBuf::from(DEFAULT_LOG_FILE));
    }
}
