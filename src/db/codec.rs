use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::db::store::StoreError;

/// Serialize an entity into a store document. chrono's serde renders every
/// `DateTime<Utc>` field as an ISO-8601 string, so the document carries only
/// store-native types.
pub fn to_document<T: Serialize>(entity: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(entity)?)
}

/// Decode a store document into a strict domain type. Timestamps are revived
/// first so documents written by other tools (naive datetimes, odd offsets)
/// still deserialize.
pub fn from_document<T: DeserializeOwned>(mut doc: Value) -> Result<T, StoreError> {
    revive_timestamps(&mut doc);
    Ok(serde_json::from_value(doc)?)
}

/// Best-effort pass over the top-level string fields of a document: any
/// string containing `T` that parses as an ISO-8601 datetime (trailing `Z`
/// accepted as UTC) is rewritten to the canonical UTC form. Parse failures
/// are absorbed and the field left untouched. The store enforces no schema,
/// and an unrelated string field must never fail the whole record.
///
/// Known imprecision: a string that merely coincides with a valid timestamp
/// is canonicalized too.
pub fn revive_timestamps(doc: &mut Value) {
    if let Value::Object(map) = doc {
        for value in map.values_mut() {
            if let Value::String(s) = value {
                if !s.contains('T') {
                    continue;
                }
                if let Some(ts) = parse_timestamp(s) {
                    *value = Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true));
                }
            }
        }
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Naive datetimes are taken as UTC.
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
