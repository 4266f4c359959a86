//! Global subscriber installation. Single test: the global default can only be set once.

use trace_rt_observability::{init_tracing, init_tracing_with_otel};

#[test]
fn subscriber_installs_once() {
    init_tracing("trace_rt_core=debug").expect("first install");
    tracing::debug!("subscriber installed");

    let provider = opentelemetry_sdk::trace::TracerProvider::builder().build();
    assert!(init_tracing("info").is_err());
    assert!(init_tracing_with_otel("info", &provider, "trace-rt-test").is_err());
}
