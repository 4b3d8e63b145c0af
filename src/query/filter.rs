//! Query filters: raw edge input and its validated form
//!
//! [`QueryParams`] is what the surrounding application hands in — optional
//! strings straight from a request or command line. [`LogQuery::parse`]
//! validates them up front so a bad timestamp is rejected with a
//! descriptive error before any scanning happens.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::{AuditError, AuditResult};
use crate::models::LogEntry;

/// Raw, unvalidated query input
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    /// Exact action name
    pub action: Option<String>,
    /// Exact actor identity
    pub actor_id: Option<String>,
    /// Exact network origin
    pub origin: Option<String>,
    /// Inclusive start timestamp (RFC 3339 or YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Inclusive end timestamp (RFC 3339 or YYYY-MM-DD)
    pub end_date: Option<String>,
    /// Result count for the no-filter "most recent" mode
    pub count: Option<usize>,
}

/// A validated query ready to run against the buffer
#[derive(Debug, Clone)]
pub struct LogQuery {
    pub action: Option<String>,
    pub actor_id: Option<String>,
    pub origin: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub count: Option<usize>,
}

impl LogQuery {
    /// Validate raw parameters into a runnable query
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::InvalidFilter`] when a timestamp bound fails
    /// to parse.
    pub fn parse(params: &QueryParams) -> AuditResult<Self> {
        let start = params
            .start_date
            .as_deref()
            .map(|v| parse_timestamp("startDate", v))
            .transpose()?;

        let end = params
            .end_date
            .as_deref()
            .map(|v| parse_timestamp("endDate", v))
            .transpose()?;

        Ok(Self {
            action: params.action.clone(),
            actor_id: params.actor_id.clone(),
            origin: params.origin.clone(),
            start,
            end,
            count: params.count,
        })
    }

    /// Check whether any filter is set (count alone is not a filter)
    pub fn has_filters(&self) -> bool {
        self.action.is_some()
            || self.actor_id.is_some()
            || self.origin.is_some()
            || self.start.is_some()
            || self.end.is_some()
    }

    /// Check whether an entry matches every provided filter
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(action) = &self.action {
            if entry.action != *action {
                return false;
            }
        }

        if let Some(actor_id) = &self.actor_id {
            if entry.context.actor_id.as_deref() != Some(actor_id.as_str()) {
                return false;
            }
        }

        if let Some(origin) = &self.origin {
            if entry.context.origin.as_deref() != Some(origin.as_str()) {
                return false;
            }
        }

        if let Some(start) = self.start {
            if entry.timestamp < start {
                return false;
            }
        }

        if let Some(end) = self.end {
            if entry.timestamp > end {
                return false;
            }
        }

        true
    }
}

/// Parse a timestamp bound
///
/// Accepts RFC 3339 (with offset) or a bare `YYYY-MM-DD`, which means
/// midnight UTC of that day for both bounds.
fn parse_timestamp(field: &'static str, value: &str) -> AuditResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    Err(AuditError::bad_timestamp(field, value))
}
