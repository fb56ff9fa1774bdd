// JSON record -> typed snapshot. Pure: no I/O, no shared state.
//
// Absent keys and explicit nulls decode to zero values, unknown keys are ignored,
// and any other value that does not fit its declared type aborts the whole decode.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::models::{
    AppInfo, AppMetrics, DhcpPayload, DnsPayload, PacketPayload, PcapPayload, StatSnapshot,
};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not parseable as JSON, or the top level is not an object.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A value is not convertible to the field's declared type.
    #[error("type mismatch: {0}")]
    TypeMismatch(#[source] serde_json::Error),
    /// The probe answered with its error envelope instead of metrics.
    #[error("probe reported error: {0}")]
    Remote(String),
    #[error("window {0:?} not present in document")]
    MissingWindow(String),
}

/// A top-level domain section of a snapshot record, decodable on its own.
pub trait Section: DeserializeOwned + Default {
    /// Key of the section in the record, e.g. `dns`.
    const KEY: &'static str;
}

impl Section for DnsPayload {
    const KEY: &'static str = "dns";
}

impl Section for DhcpPayload {
    const KEY: &'static str = "dhcp";
}

impl Section for PacketPayload {
    const KEY: &'static str = "packets";
}

impl Section for PcapPayload {
    const KEY: &'static str = "pcap";
}

impl Section for AppInfo {
    const KEY: &'static str = "app";
}

/// Decode a full snapshot. Missing domain sections decode as all-zero payloads.
pub fn decode_snapshot(input: &str) -> Result<StatSnapshot, DecodeError> {
    let record = parse_record(input)?;
    decode_snapshot_value(&record)
}

/// Decode a full snapshot from an already parsed value.
pub fn decode_snapshot_value(value: &Value) -> Result<StatSnapshot, DecodeError> {
    check_record(value)?;
    StatSnapshot::deserialize(value).map_err(|e| {
        debug!(error = %e, "snapshot decode failed");
        DecodeError::TypeMismatch(e)
    })
}

/// Decode one domain payload, ignoring the other sections.
pub fn decode_section<T: Section>(input: &str) -> Result<T, DecodeError> {
    let record = parse_record(input)?;
    decode_section_value(&record)
}

/// Decode one domain payload from an already parsed value.
pub fn decode_section_value<T: Section>(value: &Value) -> Result<T, DecodeError> {
    let record = check_record(value)?;
    match record.get(T::KEY) {
        Some(Value::Null) | None => {
            trace!(section = T::KEY, "section absent, using zero values");
            Ok(T::default())
        }
        Some(section) => T::deserialize(section).map_err(|e| {
            debug!(section = T::KEY, error = %e, "section decode failed");
            DecodeError::TypeMismatch(e)
        }),
    }
}

/// Decode the `{"app": {...}}` document.
pub fn decode_app_metrics(input: &str) -> Result<AppMetrics, DecodeError> {
    Ok(AppMetrics {
        app: decode_section(input)?,
    })
}

/// Decode the snapshot held under a window key (`1m`, `5m`, ...) of a windowed document.
pub fn decode_window(input: &str, window: &str) -> Result<StatSnapshot, DecodeError> {
    let record = parse_record(input)?;
    let Some(inner) = record.get(window) else {
        debug!(window, "window key absent");
        return Err(DecodeError::MissingWindow(window.to_string()));
    };
    decode_snapshot_value(inner)
}

/// Window keys (`<minutes>m`) of a windowed document, sorted by key.
pub fn window_keys(input: &str) -> Result<Vec<String>, DecodeError> {
    let record = parse_record(input)?;
    Ok(check_record(&record)?
        .iter()
        .filter(|(k, v)| v.is_object() && is_window_key(k))
        .map(|(k, _)| k.clone())
        .collect())
}

fn is_window_key(key: &str) -> bool {
    key.strip_suffix('m')
        .is_some_and(|mins| !mins.is_empty() && mins.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_record(input: &str) -> Result<Value, DecodeError> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| DecodeError::MalformedInput(e.to_string()))?;
    check_record(&value)?;
    Ok(value)
}

/// The value must be an object and must not be the probe's `{"error": ...}` envelope.
fn check_record(value: &Value) -> Result<&Map<String, Value>, DecodeError> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            let kind = match other {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                _ => "an array",
            };
            return Err(DecodeError::MalformedInput(format!(
                "expected a key/value record, got {kind}"
            )));
        }
    };
    if let Some(Value::String(msg)) = map.get("error") {
        debug!(error = %msg, "record is an error envelope");
        return Err(DecodeError::Remote(msg.clone()));
    }
    Ok(map)
}
