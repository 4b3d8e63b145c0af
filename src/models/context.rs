//! Structured entry metadata
//!
//! Each audit entry carries a small tagged record of well-known optional
//! fields (actor, network origin, outcome, duration, client identifier)
//! plus a free-form string map for anything action-specific. The record is
//! flattened into the entry object on the wire, so a persisted line reads
//! as one flat JSON object.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata attached to a single audit entry
///
/// Well-known fields are omitted from serialized output when unset; extra
/// fields are flattened alongside them in sorted key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryContext {
    /// Identity of the acting user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor_id: Option<String>,

    /// Network origin of the operation (e.g. client IP)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Outcome code of the operation (e.g. HTTP status)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,

    /// Wall-clock duration of the operation in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,

    /// Client identifier (e.g. user agent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Free-form action-specific metadata
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl EntryContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the acting user
    pub fn actor(mut self, actor_id: impl Into<String>) -> Self {
        self.actor_id = Some(actor_id.into());
        self
    }

    /// Set the network origin
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the outcome code
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Set the operation duration in milliseconds
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Set the client identifier
    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Add a free-form metadata field
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Check whether no metadata has been set
    pub fn is_empty(&self) -> bool {
        self.actor_id.is_none()
            && self.origin.is_none()
            && self.outcome.is_none()
            && self.duration_ms.is_none()
            && self.client.is_none()
            && self.extra.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = EntryContext::new()
            .actor("user-42")
            .origin("10.0.0.7")
            .outcome("200")
            .duration_ms(12)
            .field("method", "POST");

        assert_eq!(ctx.actor_id.as_deref(), Some("user-42"));
        assert_eq!(ctx.origin.as_deref(), Some("10.0.0.7"));
        assert_eq!(ctx.extra.get("method").map(String::as_str), Some("POST"));
        assert!(!ctx.is_empty());
    }

    #[test]
    fn test_empty_context() {
        let ctx = EntryContext::new();
        assert!(ctx.is_empty());

        // Unset fields are omitted entirely
        let json = serde_json::to_string(&ctx).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_wire_field_names() {
        let ctx = EntryContext::new().actor("u1").duration_ms(5);
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"actorId\":\"u1\""));
        assert!(json.contains("\"durationMs\":5"));
    }

    #[test]
    fn test_round_trip_with_extra() {
        let ctx = EntryContext::new()
            .actor("u1")
            .field("path", "/admin/users")
            .field("method", "DELETE");

        let json = serde_json::to_string(&ctx).unwrap();
        let back: EntryContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
