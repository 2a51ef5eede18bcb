//! Log record representation shared with host logging frameworks.
//!
//! A [`LogRecord`] is the unit handed to [`HttpHook::fire`](crate::HttpHook::fire):
//! a message, an open-ended bag of structured fields, and the time the event
//! happened. The hook ships it verbatim; nothing is transformed, truncated,
//! or redacted on the way out.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A single structured log event.
#[derive(Clone, Debug, PartialEq)]
pub struct LogRecord {
    /// The log message.
    pub message: String,
    /// Structured metadata attached to the record. Values are arbitrary JSON,
    /// so hosts can attach strings, numbers, bools, arrays, or nested objects
    /// without this crate imposing a schema.
    pub fields: BTreeMap<String, Value>,
    /// When the event happened.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Construct a record with the given message, no fields, and the current
    /// time as its timestamp.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            fields: BTreeMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Attach a structured field, returning the record for chaining.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Replace the capture timestamp with an explicit one.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
