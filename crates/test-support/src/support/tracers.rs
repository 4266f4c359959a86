//! Tracer fixtures.

use trace_rt_core::Tracer;

pub const HTTP_KEY: &str = "X-Trace-Id";
pub const KAFKA_KEY: &str = "kafka-trace";

/// Tracer with `http` and `kafka` registered on top of the wildcard protocol.
pub fn http_kafka_tracer(master: bool) -> Tracer {
    Tracer::builder()
        .protocol("http", HTTP_KEY)
        .protocol("kafka", KAFKA_KEY)
        .master(master)
        .build()
}
