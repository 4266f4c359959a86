//! Span constructors that carry the request's trace id.

use tracing::field::{display, Empty};
use tracing::Span;
use trace_rt_core::{Carrier, Protocol, Tracer};

/// Span for one request, with `trace_id` recorded when the carrier has one.
pub fn request_span(tracer: &Tracer, carrier: &Carrier, operation: &str) -> Span {
    let span = tracing::info_span!("request", operation = %operation, trace_id = Empty);
    if let Some(id) = tracer.try_get(carrier) {
        span.record("trace_id", display(&id));
    }
    span
}

/// Span for handing a carrier to a transport, with the protocol's own trace id.
pub fn propagate_span(tracer: &Tracer, carrier: &Carrier, protocol: &Protocol) -> Span {
    let span = tracing::debug_span!("propagate", protocol = %protocol, trace_id = Empty);
    if let Some(id) = tracer.try_get_by_protocol(carrier, protocol) {
        span.record("trace_id", display(&id));
    }
    span
}
