//! Observability helpers (span attributes, spans, tracing setup).

pub mod generator;
pub mod scope;
pub mod spans;
pub mod tracing_setup;

pub use generator::*;
pub use scope::*;
pub use spans::*;
pub use tracing_setup::*;
