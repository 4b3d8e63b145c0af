//! Append-only JSONL writer for audit entries

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{AuditError, AuditResult};
use crate::models::LogEntry;

/// Handles appending audit entries to the log file
///
/// Appending is the only file operation: the writer never reads, rewrites,
/// or truncates existing content. The containing directory is created on
/// demand, so a freshly configured ledger can write without a setup step.
/// Because critical actions are written immediately and again when their
/// batch is evicted, the same entry id may appear on more than one line.
pub struct LogWriter {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl LogWriter {
    /// Create a new LogWriter that appends to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append a single entry as one JSON line
    pub fn append(&self, entry: &LogEntry) -> AuditResult<()> {
        self.append_batch(std::slice::from_ref(entry))
    }

    /// Append an ordered batch of entries, one JSON line each
    ///
    /// Writes all lines and flushes once at the end.
    pub fn append_batch(&self, entries: &[LogEntry]) -> AuditResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.log_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AuditError::Io(format!("Failed to create log directory: {}", e)))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| AuditError::Io(format!("Failed to open audit log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry)
                .map_err(|e| AuditError::Json(format!("Failed to serialize audit entry: {}", e)))?;

            writeln!(file, "{}", json)
                .map_err(|e| AuditError::Io(format!("Failed to write audit entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| AuditError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
