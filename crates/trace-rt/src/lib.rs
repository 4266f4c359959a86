//! Request-scoped trace id propagation.
//!
//! Attach a correlation id to a request's [`Carrier`], carry it across
//! internal call boundaries and read it back per wire protocol:
//!
//! ```
//! use trace_rt::{Carrier, Protocol, Tracer};
//!
//! let tracer = Tracer::builder()
//!     .protocol("http", "X-Trace-Id")
//!     .protocol("kafka", "kafka-trace")
//!     .master(true)
//!     .build();
//!
//! let carrier = tracer.set(&Carrier::new());
//! let http = tracer.get_by_protocol(&carrier, &Protocol::from("http"));
//! assert_eq!(http, tracer.get_by_protocol(&carrier, &Protocol::from("kafka")));
//! ```

pub use trace_rt_core::{
    carrier, config, error, generator, global, ids, registry, scope, tracer, Carrier, Key,
    KeyTable, Protocol, ProtocolBinding, ProtocolRegistry, Result, TemporalGenerator, TraceError,
    TraceId, TraceIdGenerator, Tracer, TracerBuilder, TracerConfig, UuidGenerator, DEFAULT_KEY,
    PROTOCOL_ANY,
};

#[cfg(feature = "observability")]
pub use trace_rt_observability as observability;
