//! Tracing setup: a log file under the data directory, stderr if that fails

use std::fmt;
use std::fs::OpenOptions;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

use crate::config::Paths;

pub const LOG_FILE: &str = "aktara.log";

/// Local timestamps as `YYYY-MM-DD HH:MM:SS`
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber.
///
/// Returns the guard of the non-blocking file writer; dropping it flushes
/// pending lines, so the caller keeps it alive until exit.
pub fn init(paths: &Paths, verbose: bool) -> Option<WorkerGuard> {
    let level = if verbose { "debug" } else { "info" };
    let log_path = paths.logs_dir.join(LOG_FILE);

    let opened = paths
        .ensure_dirs()
        .map_err(|e| e.to_string())
        .and_then(|()| std::fs::create_dir_all(&paths.logs_dir).map_err(|e| e.to_string()))
        .and_then(|()| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_path)
                .map_err(|e| e.to_string())
        });

    match opened {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let installed = tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(LocalTimer)
                .try_init();
            if installed.is_err() {
                return None;
            }
            tracing::debug!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            // Only warnings on stderr unless asked for more
            let level = if verbose { "debug" } else { "warn" };
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter(level))
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_timer(LocalTimer)
                .try_init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}
