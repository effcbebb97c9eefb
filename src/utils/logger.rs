//! Logger utility for application-wide logging
//!
//! This module provides a logger implementation that works alongside the
//! standard log crate. Every record goes to the log file; records at or
//! above the console level, except errors, are echoed to stderr.
//! User-facing report lines go to stdout and are mirrored into the same file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Level, Metadata, LevelFilter};

/// File-backed logger with optional console echo
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Whether report lines and records are echoed to the console
    echo: bool,
    /// Most verbose level echoed to the console
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a logger that only writes to `log_file`
    pub fn new(log_file: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(log_file.as_ref())?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            echo: false,
            console_level: LevelFilter::Off,
        })
    }

    /// Creates a logger that writes to `log_file` and echoes to the console
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `console_level` - Most verbose record level shown on stderr
    pub fn with_console(log_file: impl AsRef<Path>, console_level: LevelFilter) -> io::Result<Self> {
        let mut logger = Logger::new(log_file)?;
        logger.echo = true;
        logger.console_level = console_level;
        Ok(logger)
    }

    /// Writes a raw line to the log file
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Reports a user-facing line: printed to stdout and kept in the log file
    pub fn report(&self, message: &str) -> io::Result<()> {
        if self.echo {
            println!("{}", message);
        }
        self.log(message)
    }

    /// Whether a record at `level` is echoed to stderr
    ///
    /// Error records stay in the file; the caller prints the failure once.
    fn echoes(&self, level: Level) -> bool {
        self.echo && level != Level::Error && level <= self.console_level
    }

    /// Installs a console logger as the global `log` backend
    ///
    /// The logger is leaked so it lives for the rest of the process and can
    /// also be handed to extractors for reporting.
    pub fn init_global_logger(log_file: impl AsRef<Path>, console_level: LevelFilter) -> io::Result<&'static Logger> {
        let logger: &'static Logger = Box::leak(Box::new(Logger::with_console(log_file, console_level)?));

        if log::set_logger(logger).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(LevelFilter::Debug);
        Ok(logger)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            if self.echoes(record.level()) {
                eprintln!("{}", message);
            }
        }
    }

    fn flush(&self) {
        // Already flushing on every write
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_errors_are_not_echoed() {
        let dir = tempdir().unwrap();
        let logger = Logger::with_console(dir.path().join("echo.log"), LevelFilter::Debug).unwrap();

        assert!(!logger.echoes(Level::Error));
        assert!(logger.echoes(Level::Warn));
        assert!(logger.echoes(Level::Debug));
    }

    #[test]
    fn test_console_level_limits_echo() {
        let dir = tempdir().unwrap();
        let logger = Logger::with_console(dir.path().join("echo.log"), LevelFilter::Warn).unwrap();
        assert!(logger.echoes(Level::Warn));
        assert!(!logger.echoes(Level::Info));

        let quiet = Logger::new(dir.path().join("quiet.log")).unwrap();
        assert!(!quiet.echoes(Level::Warn));
    }

    #[test]
    fn test_error_records_reach_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("records.log");
        let logger = Logger::with_console(&path, LevelFilter::Warn).unwrap();

        Log::log(&logger, &Record::builder()
            .level(Level::Error)
            .args(format_args!("Icon extraction failed"))
            .build());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[ERROR] Icon extraction failed\n");
    }
}
