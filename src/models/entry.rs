//! Audit entry data structures
//!
//! Defines the [`LogEntry`] record, the [`EntryId`] newtype, and the
//! [`IdGenerator`] that stamps each entry with a process-unique id built
//! from a non-decreasing millisecond timestamp and a random suffix.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::context::EntryContext;

/// Number of random hex characters appended to the timestamp component
const ID_SUFFIX_LEN: usize = 8;

/// Process-unique identifier of a single audit entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// View the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The millisecond timestamp component the id was derived from
    pub fn millis(&self) -> Option<i64> {
        self.0.split('-').next()?.parse().ok()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Generates entry ids from a monotonically non-decreasing millisecond
/// clock plus a random suffix
///
/// The suffix disambiguates entries created within the same millisecond;
/// clamping the clock to the last observed value keeps the timestamp
/// component non-decreasing even if the wall clock steps backwards.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    /// Create a fresh generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id; cannot fail and never repeats within a process
    pub fn next(&mut self) -> EntryId {
        let now = Utc::now().timestamp_millis();
        let millis = now.max(self.last_millis);
        self.last_millis = millis;

        let uuid = Uuid::new_v4().simple().to_string();
        EntryId(format!("{}-{}", millis, &uuid[..ID_SUFFIX_LEN]))
    }
}

/// A single audit log entry
///
/// Entries are immutable once captured: the engine only ever clones them
/// out of its buffer, and the buffer itself is append-only apart from
/// front eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Process-unique identifier
    pub id: EntryId,

    /// When the entry was captured (UTC, serialized as ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Short symbolic action name (e.g. "LOGIN", "USER_DELETE")
    pub action: String,

    /// Structured metadata, flattened into the entry object on the wire
    #[serde(flatten)]
    pub context: EntryContext,
}

impl LogEntry {
    /// Build a fully populated entry with a fresh capture timestamp
    pub fn capture(id: EntryId, action: impl Into<String>, context: EntryContext) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            action: action.into(),
            context,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.action,
            self.id
        );

        if let Some(actor) = &self.context.actor_id {
            output.push_str(&format!(" actor={}", actor));
        }

        if let Some(origin) = &self.context.origin {
            output.push_str(&format!(" origin={}", origin));
        }

        if let Some(outcome) = &self.context.outcome {
            output.push_str(&format!(" outcome={}", outcome));
        }

        output
    }
}
