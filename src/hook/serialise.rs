//! JSON wire serialisation for outbound payloads.
//!
//! The posted document has exactly three members: `message`, `fields`, and
//! `timestamp`. The timestamp is rendered as RFC 3339 with a `Z` suffix and
//! subsecond digits only when the record carries them.

use std::collections::BTreeMap;

use chrono::SecondsFormat;
use serde::Serialize;
use serde_json::Value;

use crate::log_record::LogRecord;

/// Wire form of a log record. Borrows from the record to avoid copying the
/// message and field bag during serialisation.
#[derive(Serialize)]
struct WirePayload<'a> {
    message: &'a str,
    fields: &'a BTreeMap<String, Value>,
    timestamp: String,
}

/// Serialise a record to the JSON document posted to the endpoint.
pub(super) fn serialise_payload(record: &LogRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(&WirePayload {
        message: &record.message,
        fields: &record.fields,
        timestamp: record
            .timestamp
            .to_rfc3339_opts(SecondsFormat::AutoSi, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn record() -> LogRecord {
        LogRecord::new("cache rebuilt")
            .field("entries", 814)
            .field("shard", "eu-1")
            .with_timestamp("2024-05-01T12:00:00Z".parse::<DateTime<Utc>>().expect("parse"))
    }

    #[rstest]
    fn payload_has_exactly_the_wire_members(record: LogRecord) {
        let payload = serialise_payload(&record).expect("serialise");
        let parsed: Value = serde_json::from_str(&payload).expect("parse");

        let object = parsed.as_object().expect("object");
        assert_eq!(object.len(), 3);
        assert_eq!(parsed["message"], json!("cache rebuilt"));
        assert_eq!(parsed["fields"], json!({"entries": 814, "shard": "eu-1"}));
        assert_eq!(parsed["timestamp"], json!("2024-05-01T12:00:00Z"));
    }

    #[rstest]
    fn subsecond_precision_is_preserved(record: LogRecord) {
        let record = record.with_timestamp(
            "2024-05-01T12:00:00.250Z".parse::<DateTime<Utc>>().expect("parse"),
        );
        let payload = serialise_payload(&record).expect("serialise");
        let parsed: Value = serde_json::from_str(&payload).expect("parse");
        assert_eq!(parsed["timestamp"], json!("2024-05-01T12:00:00.250Z"));
    }

    #[rstest]
    fn empty_field_bag_serialises_as_empty_object() {
        let record = LogRecord::new("bare message");
        let payload = serialise_payload(&record).expect("serialise");
        let parsed: Value = serde_json::from_str(&payload).expect("parse");
        assert_eq!(parsed["fields"], json!({}));
    }
}
