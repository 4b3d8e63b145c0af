//! Reader for the persisted audit log
//!
//! Used by downstream consumers (the `auditctl` inspection commands) to
//! load entries back out of the append-only file. The engine's own query
//! surface never touches this: queryable history is bounded by the
//! in-memory buffer on purpose.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use crate::error::{AuditError, AuditResult};
use crate::models::LogEntry;

/// Reads audit entries from the persisted JSONL file
pub struct LogReader {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl LogReader {
    /// Create a new LogReader for the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Read all entries from the log file
    ///
    /// Returns entries in file order (oldest first). A missing file reads
    /// as an empty log.
    pub fn read_all(&self) -> AuditResult<Vec<LogEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| AuditError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                AuditError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            let entry: LogEntry = serde_json::from_str(&line).map_err(|e| {
                AuditError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries, most recent first
    pub fn read_recent(&self, count: usize) -> AuditResult<Vec<LogEntry>> {
        let all_entries = self.read_all()?;
        Ok(all_entries.into_iter().rev().take(count).collect())
    }

    /// Get the number of entries in the audit log
    pub fn entry_count(&self) -> AuditResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if the audit log file exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryContext, IdGenerator, LogEntry};
    use crate::persist::LogWriter;
    use tempfile::TempDir;

    fn seeded_reader(actions: &[&str]) -> (LogReader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let writer = LogWriter::new(log_path.clone());

        let mut ids = IdGenerator::new();
        for action in actions {
            let entry = LogEntry::capture(ids.next(), *action, EntryContext::new());
            writer.append(&entry).unwrap();
        }

        (LogReader::new(log_path), temp_dir)
    }

    #[test]
    fn test_read_all_in_file_order() {
        let (reader, _temp) = seeded_reader(&["A", "B", "C"]);

        let entries = reader.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].action, "A");
        assert_eq!(entries[2].action, "C");
        assert_eq!(reader.entry_count().unwrap(), 3);
    }

    #[test]
    fn test_read_recent_most_recent_first() {
        let (reader, _temp) = seeded_reader(&["A", "B", "C", "D", "E"]);

        let recent = reader.read_recent(2).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].action, "E");
        assert_eq!(recent[1].action, "D");
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let reader = LogReader::new(temp_dir.path().join("audit.log"));

        assert!(!reader.exists());
        assert!(reader.read_all().unwrap().is_empty());
        assert_eq!(reader.entry_count().unwrap(), 0);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        let writer = LogWriter::new(log_path.clone());

        let mut ids = IdGenerator::new();
        writer
            .append(&LogEntry::capture(ids.next(), "A", EntryContext::new()))
            .unwrap();

        // Simulate a stray blank line between appends
        use std::io::Write;
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&log_path)
            .unwrap();
        writeln!(file).unwrap();

        writer
            .append(&LogEntry::capture(ids.next(), "B", EntryContext::new()))
            .unwrap();

        let reader = LogReader::new(log_path);
        let entries = reader.read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_malformed_line_is_reported_with_line_number() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("audit.log");
        std::fs::write(&log_path, "{not json}\n").unwrap();

        let reader = LogReader::new(log_path);
        let err = reader.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
