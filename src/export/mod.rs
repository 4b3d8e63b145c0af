//! Export functionality
//!
//! Serializes a snapshot of audit entries either as pretty-printed JSON
//! (structured, human-diffable) or as CSV (tabular, download-friendly).
//! Each payload carries a suggested file name and content type so a host
//! can serve it as an attachment directly.

mod csv;
mod json;

pub use self::csv::export_tabular;
pub use self::json::export_structured;

use std::str::FromStr;

use crate::error::{AuditError, AuditResult};
use crate::models::LogEntry;

/// Output format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    Structured,
    /// CSV with every field quoted
    Tabular,
}

impl FromStr for ExportFormat {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structured" | "json" => Ok(Self::Structured),
            "tabular" | "csv" => Ok(Self::Tabular),
            other => Err(AuditError::Export(format!(
                "Unknown export format: {} (expected 'structured' or 'tabular')",
                other
            ))),
        }
    }
}

/// A serialized export with download metadata
#[derive(Debug, Clone)]
pub struct ExportPayload {
    /// The serialized text
    pub body: String,
    /// Suggested file name for a download
    pub file_name: &'static str,
    /// MIME content type
    pub content_type: &'static str,
}

/// Serialize a snapshot of entries in the requested format
pub fn export_entries(entries: &[LogEntry], format: ExportFormat) -> AuditResult<ExportPayload> {
    match format {
        ExportFormat::Structured => Ok(ExportPayload {
            body: export_structured(entries)?,
            file_name: "audit_logs.json",
            content_type: "application/json",
        }),
        ExportFormat::Tabular => Ok(ExportPayload {
            body: export_tabular(entries)?,
            file_name: "audit_logs.csv",
            content_type: "text/csv",
        }),
    }
}
