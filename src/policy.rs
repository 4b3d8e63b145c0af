//! Critical-action policy
//!
//! A static membership check deciding which action names require synchronous
//! durability. Entries for critical actions are written to the log file
//! immediately on capture, in addition to the batched write they receive
//! when they are later evicted from the in-memory buffer. The resulting
//! duplicate file lines are expected and can be collapsed downstream by
//! entry id.

use std::collections::BTreeSet;

/// Action names persisted immediately on capture by default
pub const DEFAULT_CRITICAL_ACTIONS: &[&str] = &[
    "LOGIN",
    "LOGOUT",
    "LOGIN_FAILED",
    "USER_CREATE",
    "USER_UPDATE",
    "USER_DELETE",
    "PERMISSION_CHANGE",
    "CONFIG_CHANGE",
    "DATA_EXPORT",
    "DATA_DELETE",
];

/// The set of action names that require immediate persistence
#[derive(Debug, Clone)]
pub struct CriticalActions {
    actions: BTreeSet<String>,
}

impl CriticalActions {
    /// Build a set from an explicit list of action names
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether an action requires immediate persistence
    pub fn is_critical(&self, action: &str) -> bool {
        self.actions.contains(action)
    }

    /// Number of action names in the set
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl Default for CriticalActions {
    fn default() -> Self {
        Self::new(DEFAULT_CRITICAL_ACTIONS.iter().copied())
    }
}
