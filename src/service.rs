//! The audit service: capture, query, and export over one ledger instance
//!
//! [`AuditService`] is the single integration point for a hosting
//! application: one call per completed inbound operation, with an action
//! name and a metadata record. The service owns the in-memory buffer, the
//! id generator, the critical-action set, and the append-only writer, and
//! wires them together with the engine's durability policy:
//!
//! - every capture lands in the bounded buffer;
//! - exceeding the buffer's maximum evicts the oldest batch to the file;
//! - critical actions are additionally written to the file immediately.
//!
//! Persistence failures on the capture path never reach the caller; they
//! are routed to the configured [`FailureHook`] and the affected entries
//! are dropped. A capture can therefore never block or fail the business
//! operation it audits.
//!
//! The service expects a single logical writer: `capture` takes
//! `&mut self`, and a multi-threaded host is responsible for wrapping the
//! instance in its own lock so evictions happen exactly once per
//! threshold crossing.

use std::path::PathBuf;

use crate::buffer::RingBuffer;
use crate::config::{AuditPaths, Settings};
use crate::error::AuditResult;
use crate::export::{export_entries, ExportFormat, ExportPayload};
use crate::models::{EntryContext, IdGenerator, LogEntry};
use crate::persist::{FailureHook, LogWriter, TracingFailureHook};
use crate::policy::CriticalActions;
use crate::query::{LogQuery, QueryEngine, QueryParams};

/// An audit ledger instance with explicit open/close lifecycle
pub struct AuditService {
    settings: Settings,
    buffer: RingBuffer,
    writer: LogWriter,
    ids: IdGenerator,
    critical: CriticalActions,
    failure_hook: Box<dyn FailureHook>,
}

impl AuditService {
    /// Open a service instance against the given paths and settings
    ///
    /// Validates the settings and creates the data directories. Multiple
    /// isolated instances may be open at once (e.g. in tests), each with
    /// its own buffer and log file.
    pub fn open(paths: &AuditPaths, settings: Settings) -> AuditResult<Self> {
        settings.validate()?;
        paths.ensure_directories()?;

        let buffer = RingBuffer::new(settings.max_in_memory, settings.eviction_batch);
        let writer = LogWriter::new(paths.audit_log());
        let critical = CriticalActions::new(settings.critical_actions.iter().cloned());

        Ok(Self {
            settings,
            buffer,
            writer,
            ids: IdGenerator::new(),
            critical,
            failure_hook: Box::new(TracingFailureHook),
        })
    }

    /// Replace the persistence-failure observer
    pub fn with_failure_hook(mut self, hook: Box<dyn FailureHook>) -> Self {
        self.failure_hook = hook;
        self
    }

    /// Record one audit entry
    ///
    /// Builds the entry, appends it to the buffer, forwards any evicted
    /// batch to the writer, and writes critical actions through
    /// immediately. A critical entry may end up in the file twice (once
    /// now, once when its batch is evicted); downstream consumers
    /// deduplicate by id if they care. Never fails.
    pub fn capture(&mut self, action: &str, context: EntryContext) -> LogEntry {
        let entry = LogEntry::capture(self.ids.next(), action, context);

        if let Some(evicted) = self.buffer.append(entry.clone()) {
            self.persist(&evicted);
        }

        if self.critical.is_critical(&entry.action) {
            self.persist(std::slice::from_ref(&entry));
        }

        tracing::debug!(action = %entry.action, id = %entry.id, "captured audit entry");

        entry
    }

    /// The most recent `count` resident entries, most recent first
    pub fn recent(&self, count: usize) -> Vec<LogEntry> {
        self.buffer.recent(count)
    }

    /// Query the resident entries
    ///
    /// # Errors
    ///
    /// Fails only on malformed filter input; see [`LogQuery::parse`].
    pub fn query(&self, params: &QueryParams) -> AuditResult<Vec<LogEntry>> {
        let query = LogQuery::parse(params)?;
        Ok(QueryEngine::new(&self.buffer).search(&query, self.settings.default_query_count))
    }

    /// Export a snapshot of the resident entries
    pub fn export(&self, format: ExportFormat) -> AuditResult<ExportPayload> {
        export_entries(&self.buffer.all(), format)
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if no entries are resident
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The settings this instance was opened with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Path of the append-only log file
    pub fn log_path(&self) -> &PathBuf {
        self.writer.path()
    }

    /// Close the service, flushing still-resident entries to the file
    ///
    /// Unlike the capture path, a failed flush is reported to the caller.
    pub fn close(mut self) -> AuditResult<()> {
        let resident = self.buffer.drain_all();
        self.writer.append_batch(&resident)
    }

    fn persist(&self, batch: &[LogEntry]) {
        if let Err(error) = self.writer.append_batch(batch) {
            self.failure_hook.on_write_failure(&error, batch);
        }
    }
}
