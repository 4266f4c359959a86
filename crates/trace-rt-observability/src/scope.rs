//! Trace id attribute helpers for logs and OpenTelemetry spans.
//!
//! This module turns the trace ids found on a carrier into structured
//! attributes, so log lines and exported spans carry the same
//! correlation values.

use opentelemetry::KeyValue;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use trace_rt_core::{Carrier, Protocol, Tracer};

/// OTEL attribute holding the carrier's trace id.
pub const TRACE_ID_ATTRIBUTE: &str = "trace.id";

/// Prefix for per-protocol attributes, e.g. `trace.protocol.http`.
pub const PROTOCOL_ATTRIBUTE_PREFIX: &str = "trace.protocol.";

/// Trace id per registered protocol, for protocols whose key holds one.
pub fn trace_attributes(tracer: &Tracer, carrier: &Carrier) -> Vec<(Protocol, String)> {
    tracer
        .registry()
        .protocols()
        .into_iter()
        .filter_map(|protocol| {
            let id = tracer.try_get_by_protocol(carrier, &protocol)?;
            Some((protocol, id.into_string()))
        })
        .collect()
}

/// Format trace attributes for structured logging.
///
/// Returns `no_trace` when the carrier has no trace id.
pub fn trace_summary(tracer: &Tracer, carrier: &Carrier) -> String {
    let Some(id) = tracer.try_get(carrier) else {
        return "no_trace".to_string();
    };
    let mut parts = vec![format!("trace_id={}", id)];
    for (protocol, value) in trace_attributes(tracer, carrier) {
        if value != id.as_str() {
            parts.push(format!("{}={}", protocol, value));
        }
    }
    parts.join(", ")
}

/// Attributes for an OpenTelemetry span: `trace.id` plus one entry per protocol.
pub fn otel_attributes(tracer: &Tracer, carrier: &Carrier) -> Vec<KeyValue> {
    let Some(id) = tracer.try_get(carrier) else {
        return Vec::new();
    };
    let mut attributes = vec![KeyValue::new(TRACE_ID_ATTRIBUTE, id.into_string())];
    attributes.extend(
        trace_attributes(tracer, carrier)
            .into_iter()
            .map(|(protocol, value)| {
                KeyValue::new(format!("{}{}", PROTOCOL_ATTRIBUTE_PREFIX, protocol), value)
            }),
    );
    attributes
}

/// Attach [`otel_attributes`] to the current tracing span.
#[inline]
pub fn annotate_current_span(tracer: &Tracer, carrier: &Carrier) {
    let span = tracing::Span::current();
    for attribute in otel_attributes(tracer, carrier) {
        span.set_attribute(attribute.key, attribute.value);
    }
}
