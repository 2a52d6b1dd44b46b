//! Process-wide logging setup.
//!
//! Installs a `tracing` subscriber with a console layer on stderr and, when a
//! log file is requested, a second plain-text layer appending to that file
//! through a non-blocking `tracing-appender` writer.
use std::io::IsTerminal;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use crate::error::{Error, Result};
use crate::types::LogLevel;

/// Keeps the file writer alive; dropping it flushes buffered records.
#[must_use = "dropping the guard stops the log file writer"]
#[derive(Debug)]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Configure the global subscriber. Fails if one is already installed.
pub fn setup_logging(level: LogLevel, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_level_filter().into())
        .parse_lossy("");

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = Registry::default()
        .with(filter)
        .with(console_layer)
        .with(file_layer);
    tracing::subscriber::set_global_default(subscriber).map_err(Error::logging)?;

    Ok(LoggingGuard { _file: guard })
}

/// Open `path` for appending, creating missing parent directories.
fn file_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::Logging(format!("invalid log file path: {}", path.display())))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .map_err(Error::logging)?;

    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_writer_creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("run.log");

        let (mut writer, guard) = file_writer(&path).unwrap();
        writer.write_all(b"first record\n").unwrap();
        drop(writer);
        drop(guard);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "first record\n");
    }

    #[test]
    fn file_writer_rejects_directory_only_path() {
        assert!(matches!(file_writer(Path::new("/")), Err(Error::Logging(_))));
    }
}
