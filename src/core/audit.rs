//! Append-only audit logs
//!
//! Two sinks exist: general traffic (every request/response pair) and
//! applicant events (start, data, submission outcome). Lines are written as
//! `<timestamp> - <message>`; callers sanitize user text before recording.

use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::config::BotConfig;
use crate::core::error::AppResult;

/// Timestamp layout of audit lines, e.g. `2024-05-01 12:30:00,123`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Destination for audit lines.
///
/// Recording never fails from the caller's point of view: a sink that cannot
/// write reports the problem through the application log and moves on.
pub trait AuditSink: Send + Sync {
    fn record(&self, message: &str);
}

/// Formats one audit line (without trailing newline).
pub fn format_line(message: &str) -> String {
    format!("{} - {}", Local::now().format(TIMESTAMP_FORMAT), message)
}

/// Audit sink backed by a UTF-8 file opened in append mode.
pub struct FileAuditLog {
    path: PathBuf,
    file: Mutex<fs_err::File>,
}

impl FileAuditLog {
    /// Opens (or creates) the log file for appending.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = fs_err::OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditLog {
    fn record(&self, message: &str) {
        let line = format_line(message);
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(file, "{}", line).and_then(|_| file.flush()) {
            log::error!("Failed to write audit log {}: {}", self.path.display(), e);
        }
    }
}

/// In-memory sink, used by tests and dry runs.
#[derive(Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded messages, without timestamps, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Number of recorded messages that start with `prefix`.
    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.contains(needle))
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

/// The pair of audit sinks the conversation writes to.
#[derive(Clone)]
pub struct AuditLogs {
    pub general: Arc<dyn AuditSink>,
    pub applicants: Arc<dyn AuditSink>,
}

impl AuditLogs {
    pub fn new(general: Arc<dyn AuditSink>, applicants: Arc<dyn AuditSink>) -> Self {
        Self { general, applicants }
    }

    /// Opens both file sinks at the configured paths.
    pub fn open(config: &BotConfig) -> AppResult<Self> {
        let general = FileAuditLog::open(&config.general_log)?;
        let applicants = FileAuditLog::open(&config.applicants_log)?;
        log::info!(
            "Audit logs: general={}, applicants={}",
            general.path().display(),
            applicants.path().display()
        );
        Ok(Self::new(Arc::new(general), Arc::new(applicants)))
    }
}
