// src/logging/mod.rs
//! Activity log for simulation requests.
//!
//! One line per request, appended to `cyberscan.log` in the log directory and
//! rotated by size. Targets (emails, domains, usernames) are never written
//! here; only the component, outcome and a request id.
use std::path::{Path, PathBuf};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

const LOG_FILE_NAME: &str = "cyberscan.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Log file lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, LoggingError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl LogLevel {
    fn parse(label: &str) -> Option<Self> {
        match label {
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "WARNING" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// Emitting component, e.g. `osint.whois`
    pub component: String,
    pub message: String,
    pub request_id: Option<Uuid>,
    pub error_details: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogFilter {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    /// Minimum level to include
    pub level: Option<LogLevel>,
    pub component: Option<String>,
    pub search_term: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub struct Logger {
    log_dir: PathBuf,
    current_log_file: PathBuf,
    max_log_size: u64,    // bytes before rotation
    max_log_files: usize, // including the current file
    write_lock: Mutex<()>,
}

impl Logger {
    #[cfg(test)]
    pub fn new(log_dir: PathBuf) -> Result<Self> {
        Self::with_limits(log_dir, 10 * 1024 * 1024, 5)
    }

    pub fn with_limits(log_dir: PathBuf, max_log_size: u64, max_log_files: usize) -> Result<Self> {
        if !log_dir.exists() {
            fs::create_dir_all(&log_dir)?;
        }

        let current_log_file = log_dir.join(LOG_FILE_NAME);
        if !current_log_file.exists() {
            File::create(&current_log_file)?;
        }

        Ok(Self {
            log_dir,
            current_log_file,
            max_log_size,
            max_log_files: max_log_files.max(1),
            write_lock: Mutex::new(()),
        })
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Append one entry, rotating first if the file is over the size limit.
    pub fn log(&self, level: LogLevel, component: &str, message: &str,
               request_id: Option<Uuid>, error_details: Option<&str>) -> Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            component: component.to_string(),
            message: single_line(message),
            request_id,
            error_details: error_details.map(single_line),
        };

        let _guard = self.write_lock.lock().map_err(|_| LoggingError::LockPoisoned)?;

        self.check_rotation()?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.current_log_file)?;

        file.write_all(format_log_line(&entry).as_bytes())?;

        Ok(())
    }

    pub fn get_logs(&self, filter: &LogFilter) -> Result<Vec<LogEntry>> {
        let content = fs::read_to_string(&self.current_log_file)?;

        let entries: Vec<LogEntry> = content
            .lines()
            .filter_map(parse_log_line)
            .filter(|entry| entry_matches_filter(entry, filter))
            .collect();

        let offset = filter.offset.unwrap_or(0).min(entries.len());
        let limit = filter.limit.unwrap_or(usize::MAX);
        let end = offset.saturating_add(limit).min(entries.len());

        Ok(entries[offset..end].to_vec())
    }

    fn check_rotation(&self) -> Result<()> {
        let metadata = fs::metadata(&self.current_log_file)?;

        if metadata.len() > self.max_log_size {
            self.rotate_logs()?;
        }

        Ok(())
    }

    fn rotate_logs(&self) -> Result<()> {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S%3f");
        let rotated_log_file = self.log_dir.join(format!("cyberscan-{}.log", timestamp));

        fs::rename(&self.current_log_file, &rotated_log_file)?;
        File::create(&self.current_log_file)?;

        self.cleanup_old_logs()
    }

    /// Keep only the newest `max_log_files - 1` rotated files.
    fn cleanup_old_logs(&self) -> Result<()> {
        let mut log_files = Vec::new();

        for entry in fs::read_dir(&self.log_dir)? {
            let path = entry?.path();

            if path.is_file()
                && path.extension().map_or(false, |ext| ext == "log")
                && path != self.current_log_file
            {
                log_files.push(path);
            }
        }

        // Rotated names embed the timestamp, so reverse name order is newest first
        log_files.sort_by(|a, b| b.cmp(a));

        for file in log_files.iter().skip(self.max_log_files - 1) {
            fs::remove_file(file)?;
        }

        Ok(())
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

// 2026-10-18T12:34:56+00:00 [INFO] [osint.whois] lookup served [Request: <uuid>] [Error: details]
fn format_log_line(entry: &LogEntry) -> String {
    format!("{} [{}] [{}] {}{}{}\n",
        entry.timestamp.to_rfc3339(),
        entry.level,
        entry.component,
        entry.message,
        entry.request_id.map_or(String::new(), |id| format!(" [Request: {}]", id)),
        entry.error_details.as_ref().map_or(String::new(), |err| format!(" [Error: {}]", err))
    )
}

fn parse_log_line(line: &str) -> Option<LogEntry> {
    let (timestamp_str, rest) = line.split_once(' ')?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp_str).ok()?.with_timezone(&Utc);

    let rest = rest.strip_prefix('[')?;
    let (level_str, rest) = rest.split_once("] ")?;
    let level = LogLevel::parse(level_str)?;

    let rest = rest.strip_prefix('[')?;
    let (component, rest) = rest.split_once(']')?;

    let mut message_end = rest.len();
    let mut request_id = None;
    let mut error_details = None;

    if let Some(start) = rest.find(" [Request: ") {
        message_end = start;
        let tail = &rest[start + " [Request: ".len()..];
        let end = tail.find(']')?;
        request_id = Uuid::parse_str(&tail[..end]).ok();
    }

    if let Some(start) = rest.find(" [Error: ") {
        message_end = message_end.min(start);
        let tail = &rest[start + " [Error: ".len()..];
        // details run to the closing bracket at the end of the line
        let end = tail.rfind(']')?;
        error_details = Some(tail[..end].to_string());
    }

    Some(LogEntry {
        timestamp,
        level,
        component: component.to_string(),
        message: rest[..message_end].trim().to_string(),
        request_id,
        error_details,
    })
}

fn entry_matches_filter(entry: &LogEntry, filter: &LogFilter) -> bool {
    if filter.start_date.map_or(false, |start| entry.timestamp < start) {
        return false;
    }

    if filter.end_date.map_or(false, |end| entry.timestamp > end) {
        return false;
    }

    if filter.level.map_or(false, |min| entry.level < min) {
        return false;
    }

    if let Some(component) = &filter.component {
        if !entry.component.contains(component.as_str()) {
            return false;
        }
    }

    if let Some(term) = &filter.search_term {
        let term = term.as_str();
        if !entry.message.contains(term)
            && !entry.component.contains(term)
            && !entry.error_details.as_ref().map_or(false, |err| err.contains(term))
        {
            return false;
        }
    }

    true
}
