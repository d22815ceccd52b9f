//! Logger module
//!
//! Provides logging utilities for the greeting service including:
//! - Server lifecycle logging
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::str::FromStr;

/// Log verbosity, least verbose first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            other => Err(format!("Unknown log level: '{other}'")),
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    let level = config
        .logging
        .level
        .parse::<LogLevel>()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
        level,
    )
}

fn write_info(level: LogLevel, message: &str) {
    match writer::get() {
        Some(w) => w.write_info(level, message),
        None => println!("{message}"),
    }
}

fn write_error(level: LogLevel, message: &str) {
    match writer::get() {
        Some(w) => w.write_error(level, message),
        None => eprintln!("{message}"),
    }
}

fn write_access(message: &str) {
    match writer::get() {
        Some(w) => w.write_access(message),
        None => println!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    let info = |m: &str| write_info(LogLevel::Info, m);
    info("======================================");
    info("Vanakam greeting service started");
    info(&format!("Listening on: http://{addr}"));
    info(&format!("Greeting endpoint: GET http://{addr}/hello"));
    info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        info(&format!("Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        info(&format!("Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        info(&format!("Error log: {path}"));
    }
    info("======================================\n");
}

pub fn log_info(message: &str) {
    write_info(LogLevel::Info, &format!("[INFO] {message}"));
}

pub fn log_debug(message: &str) {
    write_info(LogLevel::Debug, &format!("[DEBUG] {message}"));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    log_debug(&format!("Connection accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(
        LogLevel::Error,
        &format!("[ERROR] Failed to serve connection: {err:?}"),
    );
}

pub fn log_error(message: &str) {
    write_error(LogLevel::Error, &format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(LogLevel::Warn, &format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(" WARN ".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("trace".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warn);
        assert!(LogLevel::Info < LogLevel::Debug);
    }
}
