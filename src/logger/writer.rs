//! Log writer module
//!
//! Thread-safe log writing to files or stdout/stderr, filtered by level.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use super::LogLevel;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LogTarget {
    fn open(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        match path {
            Some(path) => Ok(Self::File(Mutex::new(open_log_file(path)?))),
            None => Ok(fallback),
        }
    }

    fn write_line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Access and info log target
    access: LogTarget,
    /// Warning and error log target
    error: LogTarget,
    level: LogLevel,
}

impl LogWriter {
    fn new(
        access_log_file: Option<&str>,
        error_log_file: Option<&str>,
        level: LogLevel,
    ) -> io::Result<Self> {
        Ok(Self {
            access: LogTarget::open(access_log_file, LogTarget::Stdout)?,
            error: LogTarget::open(error_log_file, LogTarget::Stderr)?,
            level,
        })
    }

    /// Access lines are governed by `logging.access_log`, not by level
    pub fn write_access(&self, message: &str) {
        self.access.write_line(message);
    }

    pub fn write_info(&self, level: LogLevel, message: &str) {
        if level <= self.level {
            self.access.write_line(message);
        }
    }

    pub fn write_error(&self, level: LogLevel, message: &str) {
        if level <= self.level {
            self.error.write_line(message);
        }
    }
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(
    access_log_file: Option<&str>,
    error_log_file: Option<&str>,
    level: LogLevel,
) -> io::Result<()> {
    let writer = LogWriter::new(access_log_file, error_log_file, level)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has run
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
