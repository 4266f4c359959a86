//! Shared fixtures for the trace runtime test suites.

pub mod support;

pub use support::generators::{FixedGenerator, SequenceGenerator};
pub use support::tracers::{http_kafka_tracer, HTTP_KEY, KAFKA_KEY};
