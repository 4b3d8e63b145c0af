//! Structured (JSON) export
//!
//! Pretty-prints the full snapshot as a JSON array so two exports can be
//! compared line by line with ordinary diff tools.

use crate::error::AuditResult;
use crate::models::LogEntry;

/// Serialize entries as a pretty-printed JSON array
///
/// An empty snapshot serializes as `[]`.
pub fn export_structured(entries: &[LogEntry]) -> AuditResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}
