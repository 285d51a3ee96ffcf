use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, SubgrabError};

/// Log file named after the program: `path/to/subgrab` -> `path/to/subgrab.log`
pub fn log_file_path<P: AsRef<Path>>(program: P) -> PathBuf {
    program.as_ref().with_extension("log")
}

/// Setup logging to the console and an append-only log file.
///
/// The returned guard flushes the file writer when dropped, so callers must
/// keep it alive for the whole run and drop it before exiting.
pub fn init<P: AsRef<Path>>(log_path: P, verbose: bool) -> Result<WorkerGuard> {
    let log_path = log_path.as_ref();
    let log_dir = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_path
        .file_name()
        .ok_or_else(|| SubgrabError::Config(format!("Invalid log file path: {}", log_path.display())))?;

    // Never rotates, so the file keeps growing across runs
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(log_dir)
        .map_err(|e| SubgrabError::Config(format!("Failed to open log file: {}", e)))?;
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| SubgrabError::Config(format!("Failed to initialize logging: {}", e)))?;

    info!("Logging initialized - level: {}, file: {}", log_level, log_path.display());
    Ok(guard)
}
