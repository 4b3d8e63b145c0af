//! Tabular (CSV) export
//!
//! The header row is derived from the field set of the first entry in its
//! serialized order; every field is quoted, with embedded quote characters
//! doubled. Entries whose field sets differ from the first simply leave
//! the missing columns empty. An empty snapshot exports as the empty
//! string rather than a header-only table.

use std::collections::HashMap;

use crate::error::{AuditError, AuditResult};
use crate::models::LogEntry;

/// Serialize entries as CSV with every field quoted
pub fn export_tabular(entries: &[LogEntry]) -> AuditResult<String> {
    if entries.is_empty() {
        return Ok(String::new());
    }

    let columns: Vec<String> = flatten_fields(&entries[0])
        .into_iter()
        .map(|(key, _)| key)
        .collect();

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer
        .write_record(&columns)
        .map_err(|e| AuditError::Export(format!("Failed to write CSV header: {}", e)))?;

    for entry in entries {
        let fields: HashMap<String, String> = flatten_fields(entry).into_iter().collect();
        let row: Vec<String> = columns
            .iter()
            .map(|column| fields.get(column).cloned().unwrap_or_default())
            .collect();

        writer
            .write_record(&row)
            .map_err(|e| AuditError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AuditError::Export(format!("Failed to finish CSV output: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| AuditError::Export(format!("CSV is not UTF-8: {}", e)))
}

/// Flatten an entry into (column, value) pairs in serialized field order
fn flatten_fields(entry: &LogEntry) -> Vec<(String, String)> {
    let mut fields = vec![
        ("id".to_string(), entry.id.to_string()),
        ("timestamp".to_string(), entry.timestamp.to_rfc3339()),
        ("action".to_string(), entry.action.clone()),
    ];

    let ctx = &entry.context;
    if let Some(actor_id) = &ctx.actor_id {
        fields.push(("actorId".to_string(), actor_id.clone()));
    }
    if let Some(origin) = &ctx.origin {
        fields.push(("origin".to_string(), origin.clone()));
    }
    if let Some(outcome) = &ctx.outcome {
        fields.push(("outcome".to_string(), outcome.clone()));
    }
    if let Some(duration_ms) = ctx.duration_ms {
        fields.push(("durationMs".to_string(), duration_ms.to_string()));
    }
    if let Some(client) = &ctx.client {
        fields.push(("client".to_string(), client.clone()));
    }
    for (key, value) in &ctx.extra {
        fields.push((key.clone(), value.clone()));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryContext, IdGenerator, LogEntry};

    #[test]
    fn test_empty_snapshot_is_empty_string() {
        assert_eq!(export_tabular(&[]).unwrap(), "");
    }

    #[test]
    fn test_header_from_first_entry_field_order() {
        let mut ids = IdGenerator::new();
        let entries = vec![LogEntry::capture(
            ids.next(),
            "LOGIN",
            EntryContext::new().actor("u1").origin("10.0.0.1"),
        )];

        let body = export_tabular(&entries).unwrap();
        let header = body.lines().next().unwrap();
        assert_eq!(
            header,
            "\"id\",\"timestamp\",\"action\",\"actorId\",\"origin\""
        );
    }

    #[test]
    fn test_every_field_is_quoted() {
        let mut ids = IdGenerator::new();
        let entries = vec![LogEntry::capture(ids.next(), "LOGIN", EntryContext::new())];

        let body = export_tabular(&entries).unwrap();
        for line in body.lines() {
            assert!(line.starts_with('"'));
            assert!(line.ends_with('"'));
        }
    }

    #[test]
    fn test_embedded_quotes_round_trip() {
        let mut ids = IdGenerator::new();
        let entries = vec![LogEntry::capture(
            ids.next(),
            "API_REQUEST",
            EntryContext::new().client("agent \"quoted\" name, with comma"),
        )];

        let body = export_tabular(&entries).unwrap();
        assert!(body.contains("\"\"quoted\"\""));

        // Row structure survives: read it back with a CSV reader
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        let client = record.iter().last().unwrap();
        assert_eq!(client, "agent \"quoted\" name, with comma");
    }

    #[test]
    fn test_missing_columns_left_empty() {
        let mut ids = IdGenerator::new();
        let entries = vec![
            LogEntry::capture(ids.next(), "LOGIN", EntryContext::new().actor("u1")),
            // Second entry has no actor
            LogEntry::capture(ids.next(), "LOGOUT", EntryContext::new()),
        ];

        let body = export_tabular(&entries).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with("\"\""));
    }

    #[test]
    fn test_one_row_per_entry() {
        let mut ids = IdGenerator::new();
        let entries: Vec<LogEntry> = (0..4)
            .map(|i| LogEntry::capture(ids.next(), format!("A{}", i), EntryContext::new()))
            .collect();

        let body = export_tabular(&entries).unwrap();
        assert_eq!(body.lines().count(), 5);
    }
}
