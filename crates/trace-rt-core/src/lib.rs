//! Trace id propagation core: carriers, protocol registry and tracer.

pub mod carrier;
pub mod config;
pub mod error;
pub mod generator;
pub mod global;
pub mod ids;
pub mod registry;
pub mod scope;
pub mod tracer;

pub use carrier::Carrier;
pub use config::{ProtocolBinding, TracerConfig};
pub use error::{Result, TraceError};
pub use generator::{TemporalGenerator, TraceIdGenerator, UuidGenerator};
pub use ids::{Key, Protocol, TraceId, DEFAULT_KEY, PROTOCOL_ANY};
pub use registry::{KeyTable, ProtocolRegistry};
pub use tracer::{Tracer, TracerBuilder};
