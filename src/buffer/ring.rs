//! Ordered, append-only entry buffer with threshold-triggered eviction

use std::collections::VecDeque;

use crate::models::LogEntry;

/// Bounded in-memory buffer of audit entries
///
/// Entries are kept in insertion order. `append` is the only mutator;
/// once the buffer grows past `max_entries`, the oldest `eviction_batch`
/// entries are drained and returned so the size oscillates between
/// `max_entries - eviction_batch` and `max_entries` instead of spilling
/// on every insert.
#[derive(Debug)]
pub struct RingBuffer {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
    eviction_batch: usize,
}

impl RingBuffer {
    /// Create a buffer with the given bounds
    ///
    /// The eviction batch is clamped to `1..=max_entries` so a misconfigured
    /// batch can never leave the buffer above its maximum.
    pub fn new(max_entries: usize, eviction_batch: usize) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: VecDeque::with_capacity(max_entries + 1),
            max_entries,
            eviction_batch: eviction_batch.clamp(1, max_entries),
        }
    }

    /// Insert an entry at the tail
    ///
    /// Returns the evicted prefix when this append pushed the size past the
    /// maximum; the caller must hand that batch to the persistence writer
    /// before returning control upstream. Eviction always removes the oldest
    /// entries and never skips or duplicates across boundaries.
    pub fn append(&mut self, entry: LogEntry) -> Option<Vec<LogEntry>> {
        self.entries.push_back(entry);

        if self.entries.len() > self.max_entries {
            let evicted: Vec<LogEntry> = self.entries.drain(..self.eviction_batch).collect();
            return Some(evicted);
        }

        None
    }

    /// The last `n` entries, most recent first, without mutating the buffer
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        self.entries.iter().rev().take(n).cloned().collect()
    }

    /// Snapshot of the full current contents in insertion order
    pub fn all(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Iterate the current contents in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Number of resident entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the buffer holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured maximum size
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Configured eviction batch size
    pub fn eviction_batch(&self) -> usize {
        self.eviction_batch
    }

    /// Drain every resident entry in insertion order, leaving the buffer empty
    pub fn drain_all(&mut self) -> Vec<LogEntry> {
        self.entries.drain(..).collect()
    }
}
