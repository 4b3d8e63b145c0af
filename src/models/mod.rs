//! Core data model for the audit ledger
//!
//! A single domain entity, [`LogEntry`], plus its structured metadata
//! ([`EntryContext`]) and the id generator that stamps each entry.

pub mod context;
pub mod entry;

pub use context::EntryContext;
pub use entry::{EntryId, IdGenerator, LogEntry};
