//! Generator that reuses the active OpenTelemetry trace id.

use opentelemetry::trace::TraceContextExt;
use std::sync::Arc;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use trace_rt_core::{Carrier, TraceId, TraceIdGenerator, UuidGenerator};

/// Uses the trace id of the current tracing span's OTEL context, so log
/// correlation ids line up with exported traces. Falls back to another
/// generator when no valid span is active.
#[derive(Clone)]
pub struct SpanTraceIdGenerator {
    fallback: Arc<dyn TraceIdGenerator>,
}

impl SpanTraceIdGenerator {
    pub fn new() -> Self {
        Self::with_fallback(UuidGenerator)
    }

    pub fn with_fallback(fallback: impl TraceIdGenerator + 'static) -> Self {
        Self { fallback: Arc::new(fallback) }
    }

    /// Hex trace id of the current span, if it has a valid OTEL context.
    pub fn current_otel_trace_id() -> Option<String> {
        let context = tracing::Span::current().context();
        let span = context.span();
        let span_context = span.span_context();
        span_context
            .is_valid()
            .then(|| span_context.trace_id().to_string())
    }
}

impl Default for SpanTraceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceIdGenerator for SpanTraceIdGenerator {
    fn generate(&self, carrier: &Carrier) -> TraceId {
        match Self::current_otel_trace_id() {
            Some(id) => TraceId::new(id),
            None => {
                tracing::trace!("No active OTEL span, using fallback generator");
                self.fallback.generate(carrier)
            }
        }
    }
}
