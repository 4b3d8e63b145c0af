//! Append-only persistence for audit entries
//!
//! The log file uses a line-delimited JSON format (JSONL) where each line
//! is a complete JSON object representing one entry. [`LogWriter`] only
//! ever appends; [`LogReader`] reads the file back for downstream
//! consumers such as the inspection CLI.
//!
//! Write failures inside the capture path are routed through a
//! [`FailureHook`] rather than propagated: the engine deliberately trades
//! durability for never disturbing the operation being audited. A batch
//! that fails to persist after eviction is gone. Hosts that need stronger
//! guarantees install their own hook (retry queue, dead-letter list,
//! metrics counter) via `AuditService::with_failure_hook`.

mod reader;
mod writer;

pub use reader::LogReader;
pub use writer::LogWriter;

use crate::error::AuditError;
use crate::models::LogEntry;

/// Observer for persistence failures on the capture path
pub trait FailureHook {
    /// Called once per failed batch; the entries are already gone from the
    /// in-memory buffer when this runs
    fn on_write_failure(&self, error: &AuditError, batch: &[LogEntry]);
}

/// Default hook: report the failure on the operational log and move on
#[derive(Debug, Default)]
pub struct TracingFailureHook;

impl FailureHook for TracingFailureHook {
    fn on_write_failure(&self, error: &AuditError, batch: &[LogEntry]) {
        tracing::error!(
            dropped = batch.len(),
            %error,
            "failed to persist audit batch"
        );
    }
}
