//! OTLP JSON span formatter.
//!
//! Each exported batch becomes one OTLP `resourceSpans` document. Timestamps
//! are nanoseconds since the Unix epoch, rendered as strings, and IDs are
//! lowercase hex, as OTLP/JSON expects.

use std::time::{SystemTime, UNIX_EPOCH};

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};

/// Instrumentation scope reported for every span.
pub const SCOPE_NAME: &str = "folio";

pub struct SpanFormatter {
    resource: Resource,
}

impl SpanFormatter {
    pub const fn new(resource: Resource) -> Self {
        Self { resource }
    }

    /// Formats a batch of spans as one OTLP JSON document.
    ///
    /// ```json
    /// {
    ///   "resourceSpans": [{
    ///     "resource": { "attributes": [{"key": "service.name", "value": {"stringValue": "Folio"}}] },
    ///     "scopeSpans": [{ "scope": {"name": "folio"}, "spans": [...] }]
    ///   }]
    /// }
    /// ```
    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(k, v)| json!({ "key": k.to_string(), "value": attribute_value(v) }))
            .collect();

        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": SCOPE_NAME },
                    "spans": spans
                }]
            }]
        })
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (status_code, status_message) = status(&span.status);

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "timeUnixNano": unix_nanos(event.timestamp),
                "name": event.name,
                "attributes": attributes(&event.attributes),
            })
        })
        .collect();

    let links: Vec<JsonValue> = span
        .links
        .iter()
        .map(|link| {
            json!({
                "traceId": format!("{:032x}", link.span_context.trace_id()),
                "spanId": format!("{:016x}", link.span_context.span_id()),
                "attributes": attributes(&link.attributes),
            })
        })
        .collect();

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": span_kind(&span.span_kind),
        "startTimeUnixNano": unix_nanos(span.start_time),
        "endTimeUnixNano": unix_nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": events,
        "links": links,
        "status": { "code": status_code, "message": status_message },
    })
}

/// Nanoseconds since the epoch as a decimal string; pre-epoch times clamp to 0.
fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}

const fn span_kind(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

fn attributes(attributes: &[KeyValue]) -> Vec<JsonValue> {
    attributes
        .iter()
        .map(|kv| json!({ "key": kv.key.to_string(), "value": attribute_value(&kv.value) }))
        .collect()
}

/// Arrays have no direct OTLP/JSON mapping here and fall back to their
/// debug form as a string.
fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.to_string() }),
        Value::Array(_) => json!({ "stringValue": format!("{value:?}") }),
    }
}

fn status(status: &Status) -> (u8, String) {
    match status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    }
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
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Folio")]);
        let doc = SpanFormatter::new(resource).format_batch(&[]);

        let resource_spans = &doc["resourceSpans"][0];
        let attrs = resource_spans["resource"]["attributes"].as_array().unwrap();
        assert!(attrs.iter().any(|a| a["key"] == "service.name"
            && a["value"]["stringValue"] == "Folio"));
        assert_eq!(resource_spans["scopeSpans"][0]["scope"]["name"], SCOPE_NAME);
        assert_eq!(resource_spans["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn attribute_values_use_otlp_keys() {
        assert_eq!(attribute_value(&Value::Bool(true)), json!({ "boolValue": true }));
        assert_eq!(attribute_value(&Value::I64(42)), json!({ "intValue": "42" }));
        assert_eq!(
            attribute_value(&Value::String("tjcg".into())),
            json!({ "stringValue": "tjcg" })
        );
    }

    #[test]
    fn nanos_clamp_before_epoch() {
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_millis(1)), "1000000");
        assert_eq!(unix_nanos(UNIX_EPOCH - Duration::from_secs(1)), "0");
    }

    #[test]
    fn status_codes() {
        assert_eq!(status(&Status::Ok), (1, String::new()));
        assert_eq!(
            status(&Status::error("boom")),
            (2, "boom".to_string())
        );
    }
}
