//! Trace ids show up on the spans wrapping request handling.

use test_support::http_kafka_tracer;
use trace_rt_core::{Carrier, Protocol};
use trace_rt_observability::{propagate_span, request_span, trace_summary};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn request_span_records_trace_id() {
    let tracer = http_kafka_tracer(false);
    let carrier = tracer.set_id(&Carrier::new(), "abc-123");

    let span = request_span(&tracer, &carrier, "checkout");
    let _guard = span.enter();
    tracing::info!(summary = %trace_summary(&tracer, &carrier), "handled request");

    assert!(logs_contain("operation=checkout"));
    assert!(logs_contain("trace_id=abc-123"));
    assert!(logs_contain("handled request"));
}

#[traced_test]
#[test]
fn span_without_trace_id_leaves_field_empty() {
    let tracer = http_kafka_tracer(false);
    let carrier = Carrier::new();

    let span = propagate_span(&tracer, &carrier, &Protocol::from("kafka"));
    let _guard = span.enter();
    tracing::info!("no id yet");

    assert!(logs_contain("protocol=kafka"));
    assert!(!logs_contain("trace_id="));
}

#[tokio::test]
#[traced_test]
async fn request_span_can_instrument_async_work() {
    use tracing::Instrument;

    let tracer = http_kafka_tracer(true);
    let carrier = tracer.set_id(&Carrier::new(), "async-id");
    async {
        tracing::info!("inside instrumented future");
    }
    .instrument(request_span(&tracer, &carrier, "poll"))
    .await;

    assert!(logs_contain("trace_id=async-id"));
}
