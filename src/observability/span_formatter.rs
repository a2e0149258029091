//! OTLP JSON encoding of finished spans.
//!
//! Every exported batch becomes one self-contained OTLP document, written as
//! a single line, so the trace file can be replayed line by line into any
//! OTLP-JSON-aware collector.
//!
//! ```json
//! {
//!   "resourceSpans": [{
//!     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "Bookstore"}}] },
//!     "scopeSpans": [{ "scope": {"name": "bookstore"}, "spans": [...] }]
//!   }]
//! }
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope recorded on every span.
const SCOPE_NAME: &str = "bookstore";

/// Encodes spans as OTLP JSON under a fixed resource.
pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Builds the OTLP document for one batch.
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attributes: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| key_value(key.as_str(), value))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attributes },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": spans,
                }],
            }]
        })
    }
}

fn span(data: &SpanData) -> JsonValue {
    let (status_code, status_message) = status(&data.status);
    let parent = if data.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", data.parent_span_id)
    };

    json!({
        "traceId": format!("{:032x}", data.span_context.trace_id()),
        "spanId": format!("{:016x}", data.span_context.span_id()),
        "parentSpanId": parent,
        "name": data.name,
        "kind": kind_code(&data.span_kind),
        "startTimeUnixNano": unix_nanos(data.start_time),
        "endTimeUnixNano": unix_nanos(data.end_time),
        "attributes": attributes(&data.attributes),
        "events": data.events.iter().map(event).collect::<Vec<_>>(),
        "links": data.links.iter().map(link).collect::<Vec<_>>(),
        "status": { "code": status_code, "message": status_message },
    })
}

fn event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": unix_nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| key_value(kv.key.as_str(), &kv.value))
        .collect()
}

fn key_value(key: &str, value: &Value) -> JsonValue {
    json!({ "key": key, "value": any_value(value) })
}

/// OTLP `AnyValue`; 64-bit integers travel as strings, arrays as their
/// debug rendering.
fn any_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

/// OTLP span kind codes (internal = 1 ... consumer = 5).
const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
}

/// Nanoseconds since the Unix epoch as a decimal string; 0 before the epoch.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn any_value_follows_otlp_encoding() {
        assert_eq!(any_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(any_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(
            any_value(&Value::from("Đắc Nhân Tâm")),
            json!({ "stringValue": "Đắc Nhân Tâm" })
        );
    }

    #[test]
    fn timestamps_are_decimal_nanos() {
        let time = UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(unix_nanos(time), "1500000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn empty_batch_carries_resource() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Bookstore")]);
        let doc = SpanFormatter::new(resource).format_batch(&[]);

        let scope = &doc["resourceSpans"][0]["scopeSpans"][0];
        assert_eq!(scope["scope"]["name"], SCOPE_NAME);
        assert_eq!(scope["spans"], json!([]));

        let attributes = doc["resourceSpans"][0]["resource"]["attributes"]
            .as_array()
            .unwrap();
        assert!(attributes.contains(&json!({
            "key": "service.name",
            "value": { "stringValue": "Bookstore" }
        })));
    }
}
