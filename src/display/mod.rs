//! Terminal display formatting for audit entries
//!
//! Formats entries for `auditctl` output in table and detail views.

mod entries;

pub use entries::{format_entry_detail, format_entry_table};
