/*!
 * Console and file logging behind the `log` facade.
 *
 * `init` installs the logger once per process and hands back a guard; the
 * guard flushes both sinks when it goes out of scope at the end of `main`.
 */

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingOptions {
    /// Maximum level emitted to both sinks
    pub level: LevelFilter,

    /// Append-mode log file, `None` for console only
    pub log_file: Option<PathBuf>,
}

// @struct: Logger writing to stderr and an optional file
pub struct TranscriptLogger {
    level: LevelFilter,
    file: Option<Mutex<BufWriter<File>>>,
}

impl TranscriptLogger {
    // @creates: Logger, opening the log file in append mode
    pub fn new(options: &LoggingOptions) -> Result<Self> {
        let file = match &options.log_file {
            Some(path) => Some(Mutex::new(BufWriter::new(Self::open_log_file(path)?))),
            None => None,
        };

        Ok(Self {
            level: options.level,
            file,
        })
    }

    fn open_log_file(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }

    /// A log-file line: `2024-01-31 12:00:00,123 - INFO - message`
    pub fn format_file_line(record: &Record) -> String {
        let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        format!("{} - {} - {}", now, record.level(), record.args())
    }
}

impl Log for TranscriptLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let now = chrono::Local::now().format("%H:%M:%S.%3f");
        let _ = writeln!(
            std::io::stderr(),
            "{}{} {} {}\x1B[0m",
            Self::color_for_level(record.level()),
            now,
            record.level(),
            record.args()
        );

        if let Some(file) = &self.file {
            let mut writer = file.lock();
            let _ = writeln!(writer, "{}", Self::format_file_line(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
        if let Some(file) = &self.file {
            let _ = file.lock().flush();
        }
    }
}

/// Flushes the installed logger when dropped
#[must_use]
pub struct LogGuard {
    logger: &'static TranscriptLogger,
}

impl Drop for LogGuard {
    fn drop(&mut self) {
        self.logger.flush();
    }
}

/// Install the process-wide logger. Fails if a logger is already set.
pub fn init(options: &LoggingOptions) -> Result<LogGuard> {
    let logger: &'static TranscriptLogger = Box::leak(Box::new(TranscriptLogger::new(options)?));
    log::set_logger(logger)
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;
    log::set_max_level(options.level);
    Ok(LogGuard { logger })
}
