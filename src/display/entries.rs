//! Audit entry display formatting
//!
//! Formats entries for terminal output in table and detail views.

use crate::models::LogEntry;

/// Format a list of entries as a table
pub fn format_entry_table(entries: &[LogEntry]) -> String {
    if entries.is_empty() {
        return "No audit entries found.".to_string();
    }

    // Calculate column widths
    let action_width = entries
        .iter()
        .map(|e| e.action.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let actor_width = entries
        .iter()
        .map(|e| e.context.actor_id.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(5)
        .max(5);

    let origin_width = entries
        .iter()
        .map(|e| e.context.origin.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(6)
        .max(6);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:<19}  {:<action_width$}  {:<actor_width$}  {:<origin_width$}  {}\n",
        "Timestamp",
        "Action",
        "Actor",
        "Origin",
        "Outcome",
        action_width = action_width,
        actor_width = actor_width,
        origin_width = origin_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<19}  {:-<action_width$}  {:-<actor_width$}  {:-<origin_width$}  {:-<7}\n",
        "",
        "",
        "",
        "",
        "",
        action_width = action_width,
        actor_width = actor_width,
        origin_width = origin_width,
    ));

    // Entry rows
    for entry in entries {
        output.push_str(&format!(
            "{:<19}  {:<action_width$}  {:<actor_width$}  {:<origin_width$}  {}\n",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.action,
            entry.context.actor_id.as_deref().unwrap_or("-"),
            entry.context.origin.as_deref().unwrap_or("-"),
            entry.context.outcome.as_deref().unwrap_or("-"),
            action_width = action_width,
            actor_width = actor_width,
            origin_width = origin_width,
        ));
    }

    output
}

/// Format a single entry with every field, one per line
pub fn format_entry_detail(entry: &LogEntry) -> String {
    let mut output = String::new();

    output.push_str(&format!("Id:        {}\n", entry.id));
    output.push_str(&format!(
        "Timestamp: {}\n",
        entry.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("Action:    {}\n", entry.action));

    if let Some(actor) = &entry.context.actor_id {
        output.push_str(&format!("Actor:     {}\n", actor));
    }
    if let Some(origin) = &entry.context.origin {
        output.push_str(&format!("Origin:    {}\n", origin));
    }
    if let Some(outcome) = &entry.context.outcome {
        output.push_str(&format!("Outcome:   {}\n", outcome));
    }
    if let Some(duration_ms) = entry.context.duration_ms {
        output.push_str(&format!("Duration:  {}ms\n", duration_ms));
    }
    if let Some(client) = &entry.context.client {
        output.push_str(&format!("Client:    {}\n", client));
    }
    for (key, value) in &entry.context.extra {
        output.push_str(&format!("{}: {}\n", key, value));
    }

    output
}
