//! Query surface over the in-memory buffer
//!
//! Filters the resident entries by action, actor, origin, and time range,
//! or falls back to "most recent N" when no filter is given. Entries that
//! have already been evicted to the log file are not searchable here; that
//! bound on queryable history is a deliberate property of the engine, not
//! an oversight.

mod filter;

pub use filter::{LogQuery, QueryParams};

use crate::buffer::RingBuffer;
use crate::models::LogEntry;

/// Read-only query engine over a ring buffer
pub struct QueryEngine<'a> {
    buffer: &'a RingBuffer,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine over the given buffer
    pub fn new(buffer: &'a RingBuffer) -> Self {
        Self { buffer }
    }

    /// Run a validated query
    ///
    /// With at least one filter set: linear scan in insertion order,
    /// retaining entries that match every filter. With no filters: the
    /// most recent entries first, limited to the query's count (or
    /// `default_count` when none was given).
    pub fn search(&self, query: &LogQuery, default_count: usize) -> Vec<LogEntry> {
        if query.has_filters() {
            self.buffer
                .iter()
                .filter(|entry| query.matches(entry))
                .cloned()
                .collect()
        } else {
            self.buffer.recent(query.count.unwrap_or(default_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryContext, IdGenerator, LogEntry};

    fn seeded_buffer() -> RingBuffer {
        let mut ids = IdGenerator::new();
        let mut buffer = RingBuffer::new(100, 50);

        for i in 0..10 {
            let action = if i % 2 == 0 { "LOGIN" } else { "API_REQUEST" };
            let actor = format!("user-{}", i % 3);
            let entry = LogEntry::capture(
                ids.next(),
                action,
                EntryContext::new().actor(actor).origin("10.0.0.1"),
            );
            buffer.append(entry);
        }

        buffer
    }

    #[test]
    fn test_filter_by_action_only_matches_that_action() {
        let buffer = seeded_buffer();
        let engine = QueryEngine::new(&buffer);

        let query = LogQuery::parse(&QueryParams {
            action: Some("LOGIN".into()),
            ..Default::default()
        })
        .unwrap();

        let results = engine.search(&query, 50);
        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|e| e.action == "LOGIN"));
    }

    #[test]
    fn test_combined_filters_narrow_monotonically() {
        let buffer = seeded_buffer();
        let engine = QueryEngine::new(&buffer);

        let by_action = LogQuery::parse(&QueryParams {
            action: Some("LOGIN".into()),
            ..Default::default()
        })
        .unwrap();

        let by_action_and_actor = LogQuery::parse(&QueryParams {
            action: Some("LOGIN".into()),
            actor_id: Some("user-0".into()),
            ..Default::default()
        })
        .unwrap();

        let wide = engine.search(&by_action, 50);
        let narrow = engine.search(&by_action_and_actor, 50);

        assert!(narrow.len() <= wide.len());
        for entry in &narrow {
            assert!(wide.iter().any(|e| e.id == entry.id));
        }
    }

    #[test]
    fn test_no_filters_falls_back_to_recent() {
        let buffer = seeded_buffer();
        let engine = QueryEngine::new(&buffer);

        let query = LogQuery::parse(&QueryParams::default()).unwrap();
        let results = engine.search(&query, 3);
        assert_eq!(results.len(), 3);

        // Most recent first
        let all = buffer.all();
        assert_eq!(results[0].id, all[all.len() - 1].id);
    }

    #[test]
    fn test_count_applies_only_without_filters() {
        let buffer = seeded_buffer();
        let engine = QueryEngine::new(&buffer);

        let query = LogQuery::parse(&QueryParams {
            count: Some(2),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.search(&query, 50).len(), 2);

        // A filtered query returns every match regardless of count
        let query = LogQuery::parse(&QueryParams {
            action: Some("LOGIN".into()),
            count: Some(2),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.search(&query, 50).len(), 5);
    }

    #[test]
    fn test_filtered_results_keep_insertion_order() {
        let buffer = seeded_buffer();
        let engine = QueryEngine::new(&buffer);

        let query = LogQuery::parse(&QueryParams {
            origin: Some("10.0.0.1".into()),
            ..Default::default()
        })
        .unwrap();

        let results = engine.search(&query, 50);
        let all = buffer.all();
        assert_eq!(results.len(), all.len());
        for (r, a) in results.iter().zip(all.iter()) {
            assert_eq!(r.id, a.id);
        }
    }
}
