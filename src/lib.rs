//! Audit Ledger - embeddable audit trail engine
//!
//! This library captures security- and compliance-relevant actions on
//! behalf of a hosting application, holds them in a bounded in-memory
//! buffer, and selectively persists them to an append-only JSONL file:
//! batched when the buffer evicts its oldest entries, immediately for
//! actions classified as critical. Query and export operate on the
//! resident buffer; the persisted file is a write-mostly artifact for
//! downstream consumers.
//!
//! This is a best-effort trail, not a crash-consistent event store: a
//! write failure during eviction drops that batch.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The audit entry and its structured metadata
//! - `policy`: Critical-action classification
//! - `buffer`: Bounded in-memory retention with threshold eviction
//! - `persist`: Append-only JSONL writer, file reader, failure hook
//! - `query`: Filtered search over resident entries
//! - `export`: Structured (JSON) and tabular (CSV) serialization
//! - `service`: The capture service tying it all together
//! - `display`: Terminal formatting for the `auditctl` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use audit_ledger::config::{AuditPaths, Settings};
//! use audit_ledger::models::EntryContext;
//! use audit_ledger::AuditService;
//!
//! let paths = AuditPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut audit = AuditService::open(&paths, settings)?;
//!
//! audit.capture("LOGIN", EntryContext::new().actor("user-42").origin(ip));
//! ```

pub mod buffer;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod persist;
pub mod policy;
pub mod query;
pub mod service;

pub use error::{AuditError, AuditResult};
pub use models::{EntryContext, LogEntry};
pub use service::AuditService;
